// gearwright-core: Errors, configuration, and unit helpers for gear train design.

pub mod config;
pub mod error;
pub mod units;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{DesignJob, GearingConfig, MotorConfig, TargetConfig};
    pub use crate::error::{ConfigError, DesignError, GearwrightError, ValidationError};
    pub use crate::units;
}
