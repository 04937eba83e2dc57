//! Engine configuration and advisory validation.
//!
//! [`EngineConfig`] bundles everything needed to build a
//! [`FieldEngine`](crate::FieldEngine). Construction from a config never
//! fails: out-of-range extents are clamped exactly as
//! [`FieldEngine::new`](crate::FieldEngine::new) does. Callers who would
//! rather be told about such inputs run [`validate()`](EngineConfig::validate)
//! first.

use std::error::Error;
use std::fmt;

use plume_core::Constants;
use plume_stencil::StepRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Issues reported by [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A requested extent is below 1 and would be clamped.
    DimensionClamped {
        /// `"rows"` or `"cols"`.
        axis: &'static str,
        /// The requested value.
        requested: i32,
    },
    /// One of the constants is NaN or infinite.
    NonFiniteConstant {
        /// Field name of the offending constant.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The spatial step is zero or negative.
    NonPositiveSpatialStep {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionClamped { axis, requested } => {
                write!(f, "{axis} = {requested} is below 1 and would be clamped")
            }
            Self::NonFiniteConstant { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NonPositiveSpatialStep { value } => {
                write!(f, "spatial_step must be positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a field engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Requested row count. Values below 1 are clamped to 1.
    pub rows: i32,
    /// Requested column count. Values below 1 are clamped to 1.
    pub cols: i32,
    /// Physical constants. Default: `(1.0, 1.0, 1.0)`.
    pub constants: Constants,
    /// Update rule applied by `step()`. Default: neighbour average.
    pub step_rule: StepRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            constants: Constants::default(),
            step_rule: StepRule::default(),
        }
    }
}

impl EngineConfig {
    /// Configuration for a `rows x cols` engine with default constants and
    /// rule.
    pub fn with_extent(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Report the first input that the engine would silently adjust or
    /// that makes the explicit rule meaningless.
    ///
    /// Purely advisory: nothing in the engine calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Extents.
        if self.rows < 1 {
            return Err(ConfigError::DimensionClamped {
                axis: "rows",
                requested: self.rows,
            });
        }
        if self.cols < 1 {
            return Err(ConfigError::DimensionClamped {
                axis: "cols",
                requested: self.cols,
            });
        }
        // 2. Constants must be finite.
        let k = &self.constants;
        for (name, value) in [
            ("diffusivity", k.diffusivity),
            ("spatial_step", k.spatial_step),
            ("time_step", k.time_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteConstant { name, value });
            }
        }
        // 3. dx appears squared in a denominator.
        if k.spatial_step <= 0.0 {
            return Err(ConfigError::NonPositiveSpatialStep {
                value: k.spatial_step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.rows, 5);
        assert_eq!(cfg.cols, 5);
        assert_eq!(cfg.constants, Constants::default());
        assert_eq!(cfg.step_rule, StepRule::NeighbourAverage);
        cfg.validate().unwrap();
    }

    #[test]
    fn with_extent_keeps_defaults() {
        let cfg = EngineConfig::with_extent(3, 9);
        assert_eq!((cfg.rows, cfg.cols), (3, 9));
        assert_eq!(cfg.constants, Constants::default());
    }

    #[test]
    fn zero_rows_reported() {
        let cfg = EngineConfig::with_extent(0, 4);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DimensionClamped {
                axis: "rows",
                requested: 0
            })
        );
    }

    #[test]
    fn negative_cols_reported() {
        let cfg = EngineConfig::with_extent(4, -2);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DimensionClamped { axis: "cols", .. })
        ));
    }

    #[test]
    fn non_finite_constant_reported() {
        let cfg = EngineConfig {
            constants: Constants::new(1.0, 1.0, f64::INFINITY),
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::NonFiniteConstant { name, .. }) => assert_eq!(name, "time_step"),
            other => panic!("expected NonFiniteConstant, got {other:?}"),
        }
    }

    #[test]
    fn zero_spatial_step_reported() {
        let cfg = EngineConfig {
            constants: Constants::new(1.0, 0.0, 1.0),
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveSpatialStep { value: 0.0 })
        );
    }

    #[test]
    fn error_messages() {
        let e = ConfigError::DimensionClamped {
            axis: "rows",
            requested: -1,
        };
        assert_eq!(e.to_string(), "rows = -1 is below 1 and would be clamped");
        let e = ConfigError::NonPositiveSpatialStep { value: -0.5 };
        assert_eq!(e.to_string(), "spatial_step must be positive, got -0.5");
    }
}
