//! Append-only registry of source values.

use tracing::trace;

/// An ordered, append-only list of source values.
///
/// Capacity is tracked explicitly and grows by doubling, starting from
/// zero: 0 → 2 → 4 → 8 → … Backing storage is reserved to exactly that
/// capacity, so [`capacity`](SourceRegistry::capacity) does not depend on
/// the allocator's own growth policy.
///
/// There is no removal and no keyed lookup: values come back out only in
/// insertion order.
///
/// ```
/// use plume_engine::SourceRegistry;
///
/// let mut sources = SourceRegistry::new();
/// assert_eq!(sources.capacity(), 0);
/// sources.push(100.0f32);
/// assert_eq!(sources.capacity(), 2);
/// sources.push(50.0);
/// sources.push(25.0);
/// assert_eq!(sources.capacity(), 4);
/// assert_eq!(sources.as_slice(), &[100.0, 50.0, 25.0]);
/// ```
#[derive(Debug, PartialEq)]
pub struct SourceRegistry<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> SourceRegistry<T> {
    /// Capacity after the first growth from empty.
    pub const INITIAL_CAPACITY: usize = 2;

    /// Create an empty registry with zero capacity.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            capacity: 0,
        }
    }

    /// Append a value at the end.
    ///
    /// When the registry is full the capacity doubles (or becomes
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) from zero) before the
    /// value is stored.
    pub fn push(&mut self, value: T) {
        if self.values.len() == self.capacity {
            self.grow();
        }
        self.values.push(value);
        trace!(
            len = self.values.len(),
            capacity = self.capacity,
            "source appended"
        );
    }

    fn grow(&mut self) {
        let next = if self.capacity == 0 {
            Self::INITIAL_CAPACITY
        } else {
            self.capacity * 2
        };
        self.values.reserve_exact(next - self.values.len());
        self.capacity = next;
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value has been appended.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current logical capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All values in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterate over values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Copy> SourceRegistry<T> {
    /// The value at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }
}

impl<T> Default for SourceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// The copy holds exactly `len` values but inherits the logical capacity,
// so both registries continue along the same doubling sequence.
impl<T: Clone> Clone for SourceRegistry<T> {
    fn clone(&self) -> Self {
        let mut values = Vec::with_capacity(self.capacity);
        values.extend_from_slice(&self.values);
        Self {
            values,
            capacity: self.capacity,
        }
    }
}

impl<T> Extend<T> for SourceRegistry<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for SourceRegistry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<'a, T> IntoIterator for &'a SourceRegistry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty_with_zero_capacity() {
        let s = SourceRegistry::<f32>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert_eq!(s.get(0), None);
    }

    #[test]
    fn capacity_doubles_from_two() {
        let mut s = SourceRegistry::new();
        let mut seen = vec![s.capacity()];
        for i in 0..9 {
            s.push(i);
            if *seen.last().unwrap() != s.capacity() {
                seen.push(s.capacity());
            }
        }
        assert_eq!(seen, vec![0, 2, 4, 8, 16]);
    }

    #[test]
    fn preserves_insertion_order() {
        let s: SourceRegistry<i64> = [5, -3, 9, 9, 0].into_iter().collect();
        assert_eq!(s.as_slice(), &[5, -3, 9, 9, 0]);
        assert_eq!(s.get(2), Some(9));
        let collected: Vec<i64> = s.iter().copied().collect();
        assert_eq!(collected, vec![5, -3, 9, 9, 0]);
    }

    #[test]
    fn clone_copies_contents_and_capacity() {
        let mut a: SourceRegistry<f64> = [1.0, 2.0, 3.0].into_iter().collect();
        let b = a.clone();
        assert_eq!(b.as_slice(), a.as_slice());
        assert_eq!(b.capacity(), 4);

        a.push(4.0);
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn clone_of_empty_has_zero_capacity() {
        let a = SourceRegistry::<u8>::new();
        let mut b = a.clone();
        assert_eq!(b.capacity(), 0);
        b.push(1);
        assert_eq!(b.capacity(), 2);
        assert!(a.is_empty());
    }

    proptest! {
        #[test]
        fn length_and_capacity_after_n_appends(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut s = SourceRegistry::new();
            for &v in &values {
                s.push(v);
                prop_assert!(s.len() <= s.capacity());
            }
            prop_assert_eq!(s.len(), values.len());
            prop_assert_eq!(s.as_slice(), values.as_slice());

            let expected_cap = if values.is_empty() {
                0
            } else {
                values.len().next_power_of_two().max(2)
            };
            prop_assert_eq!(s.capacity(), expected_cap);
        }
    }
}
