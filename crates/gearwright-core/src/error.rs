use thiserror::Error;

/// Top-level error type for gearwright.
#[derive(Debug, Error)]
pub enum GearwrightError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Design error: {0}")]
    Design(#[from] DesignError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Gear train synthesis and evaluation errors.
///
/// Every variant is a deterministic function of the design inputs; there is
/// nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DesignError {
    #[error(
        "Required gear ratio {required_ratio:.3} < 1: target speed exceeds motor no-load speed (needs step-up, not reduction)"
    )]
    InvertedRatio { required_ratio: f64 },

    #[error("Gear train not synthesized: call synthesize() before evaluate()")]
    TrainNotSynthesized,
}

/// Specification validation errors.
///
/// Copy + static messages for cheap propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Motor voltage must be > 0")]
    NonPositiveVoltage,

    #[error("Motor no-load current must be >= 0")]
    NegativeNoLoadCurrent,

    #[error("Motor stall current must exceed no-load current")]
    StallCurrentNotAboveNoLoad,

    #[error("Motor no-load speed must be > 0")]
    NonPositiveNoLoadSpeed,

    #[error("Motor stall torque must be > 0")]
    NonPositiveStallTorque,

    #[error("Target output speed must be > 0")]
    NonPositiveTargetSpeed,

    #[error("Target output torque must be > 0")]
    NonPositiveTargetTorque,

    #[error("Unknown gear kind (expected spur, helical, bevel, worm, or planetary)")]
    UnknownGearKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gearwright_error_from_config_error() {
        let err = ConfigError::Invalid {
            field: "motor.voltage".into(),
            message: "must be > 0".into(),
        };
        let top: GearwrightError = err.into();
        assert!(matches!(top, GearwrightError::Config(_)));
        assert!(top.to_string().contains("motor.voltage"));
    }

    #[test]
    fn gearwright_error_from_design_error() {
        let err = DesignError::TrainNotSynthesized;
        let top: GearwrightError = err.into();
        assert!(matches!(top, GearwrightError::Design(_)));
        assert!(top.to_string().contains("synthesize()"));
    }

    #[test]
    fn gearwright_error_from_validation_error() {
        let err = ValidationError::NonPositiveVoltage;
        let top: GearwrightError = err.into();
        assert!(matches!(top, GearwrightError::Validation(_)));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn design_error_is_copy() {
        let err = DesignError::InvertedRatio {
            required_ratio: 0.5,
        };
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }

    #[test]
    fn design_error_display_messages() {
        assert_eq!(
            DesignError::InvertedRatio {
                required_ratio: 0.5
            }
            .to_string(),
            "Required gear ratio 0.500 < 1: target speed exceeds motor no-load speed (needs step-up, not reduction)"
        );
        assert_eq!(
            DesignError::TrainNotSynthesized.to_string(),
            "Gear train not synthesized: call synthesize() before evaluate()"
        );
    }

    #[test]
    fn validation_error_display_messages() {
        assert_eq!(
            ValidationError::NonPositiveVoltage.to_string(),
            "Motor voltage must be > 0"
        );
        assert_eq!(
            ValidationError::StallCurrentNotAboveNoLoad.to_string(),
            "Motor stall current must exceed no-load current"
        );
        assert_eq!(
            ValidationError::NonPositiveTargetTorque.to_string(),
            "Target output torque must be > 0"
        );
        assert_eq!(
            ValidationError::UnknownGearKind.to_string(),
            "Unknown gear kind (expected spur, helical, bevel, worm, or planetary)"
        );
    }
}
