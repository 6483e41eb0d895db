use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

fn default_motor_name() -> String {
    "unnamed".into()
}
fn default_gear_kind() -> String {
    "spur".into()
}
const fn default_motor_efficiency() -> f64 {
    0.85
}

// ---------------------------------------------------------------------------
// MotorConfig
// ---------------------------------------------------------------------------

/// Motor ratings as read from a design job file.
///
/// Electrical ratings are required; physical dimensions are optional and
/// only used for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorConfig {
    /// Motor name or catalog model.
    #[serde(default = "default_motor_name")]
    pub name: String,

    /// Nominal voltage (V).
    pub voltage: f64,

    /// No-load current (A).
    pub no_load_current: f64,

    /// Stall current (A).
    pub stall_current: f64,

    /// No-load speed (RPM).
    pub no_load_rpm: f64,

    /// Stall torque (mNm).
    pub stall_torque_mnm: f64,

    /// Motor body diameter (mm). Reporting only.
    #[serde(default)]
    pub diameter_mm: f64,

    /// Motor body length (mm). Reporting only.
    #[serde(default)]
    pub length_mm: f64,

    /// Motor mass (g). Reporting only.
    #[serde(default)]
    pub mass_g: f64,
}

// ---------------------------------------------------------------------------
// TargetConfig
// ---------------------------------------------------------------------------

/// Desired output operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Target output speed (RPM).
    pub output_rpm: f64,

    /// Target output torque (mNm).
    pub output_torque_mnm: f64,
}

// ---------------------------------------------------------------------------
// GearingConfig
// ---------------------------------------------------------------------------

/// Gear train synthesis options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearingConfig {
    /// Gear technology tag (default: "spur"). Parsed into a closed enum by
    /// the design crate; unknown tags are rejected there.
    #[serde(default = "default_gear_kind")]
    pub kind: String,

    /// Explicit stage-count override. Omit for automatic selection.
    #[serde(default)]
    pub stages: Option<u32>,

    /// Assumed motor mechanical efficiency (default: 0.85).
    #[serde(default = "default_motor_efficiency")]
    pub motor_efficiency: f64,
}

impl Default for GearingConfig {
    fn default() -> Self {
        Self {
            kind: default_gear_kind(),
            stages: None,
            motor_efficiency: default_motor_efficiency(),
        }
    }
}

// ---------------------------------------------------------------------------
// DesignJob
// ---------------------------------------------------------------------------

/// A complete gear train design job: one motor, one target, gearing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignJob {
    pub motor: MotorConfig,
    pub target: TargetConfig,
    #[serde(default)]
    pub gearing: GearingConfig,
}

impl DesignJob {
    /// Load and validate a design job from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a design job from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let job: Self = toml::from_str(text)?;
        job.validate()?;
        Ok(job)
    }

    /// Validate numeric invariants. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &str, message: &str) -> ConfigError {
            ConfigError::Invalid {
                field: field.into(),
                message: message.into(),
            }
        }

        if self.motor.voltage <= 0.0 {
            return Err(invalid("motor.voltage", "must be > 0"));
        }
        if self.motor.no_load_current < 0.0 {
            return Err(invalid("motor.no_load_current", "must be >= 0"));
        }
        if self.motor.stall_current <= self.motor.no_load_current {
            return Err(invalid(
                "motor.stall_current",
                "must exceed no_load_current",
            ));
        }
        if self.motor.no_load_rpm <= 0.0 {
            return Err(invalid("motor.no_load_rpm", "must be > 0"));
        }
        if self.motor.stall_torque_mnm <= 0.0 {
            return Err(invalid("motor.stall_torque_mnm", "must be > 0"));
        }
        if self.target.output_rpm <= 0.0 {
            return Err(invalid("target.output_rpm", "must be > 0"));
        }
        if self.target.output_torque_mnm <= 0.0 {
            return Err(invalid("target.output_torque_mnm", "must be > 0"));
        }
        if self.gearing.stages == Some(0) {
            return Err(invalid("gearing.stages", "must be >= 1 when present"));
        }
        if self.gearing.motor_efficiency <= 0.0 || self.gearing.motor_efficiency > 1.0 {
            return Err(invalid("gearing.motor_efficiency", "must be in (0, 1]"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_JOB: &str = r#"
        [motor]
        name = "FA-130"
        voltage = 3.0
        no_load_current = 0.15
        stall_current = 2.2
        no_load_rpm = 9600
        stall_torque_mnm = 11.8
        diameter_mm = 20.4
        length_mm = 25.1
        mass_g = 18.0

        [target]
        output_rpm = 100
        output_torque_mnm = 500

        [gearing]
        kind = "planetary"
        stages = 2
        motor_efficiency = 0.9
    "#;

    const MINIMAL_JOB: &str = r#"
        [motor]
        voltage = 12.0
        no_load_current = 0.08
        stall_current = 3.8
        no_load_rpm = 7400
        stall_torque_mnm = 98.0

        [target]
        output_rpm = 100
        output_torque_mnm = 500
    "#;

    #[test]
    fn full_job_parses() {
        let job = DesignJob::from_toml_str(FULL_JOB).unwrap();
        assert_eq!(job.motor.name, "FA-130");
        assert!((job.motor.voltage - 3.0).abs() < f64::EPSILON);
        assert_eq!(job.gearing.kind, "planetary");
        assert_eq!(job.gearing.stages, Some(2));
        assert!((job.gearing.motor_efficiency - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn minimal_job_applies_defaults() {
        let job = DesignJob::from_toml_str(MINIMAL_JOB).unwrap();
        assert_eq!(job.motor.name, "unnamed");
        assert!((job.motor.diameter_mm).abs() < f64::EPSILON);
        assert_eq!(job.gearing.kind, "spur");
        assert_eq!(job.gearing.stages, None);
        assert!((job.gearing.motor_efficiency - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_required_field_is_toml_error() {
        let err = DesignJob::from_toml_str("[motor]\nvoltage = 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn zero_voltage_rejected() {
        let text = MINIMAL_JOB.replace("voltage = 12.0", "voltage = 0.0");
        let err = DesignJob::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "motor.voltage"
        ));
    }

    #[test]
    fn stall_current_below_no_load_rejected() {
        let text = MINIMAL_JOB.replace("stall_current = 3.8", "stall_current = 0.05");
        let err = DesignJob::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "motor.stall_current"
        ));
    }

    #[test]
    fn zero_target_torque_rejected() {
        let text = MINIMAL_JOB.replace("output_torque_mnm = 500", "output_torque_mnm = 0");
        let err = DesignJob::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "target.output_torque_mnm"
        ));
    }

    #[test]
    fn zero_stage_override_rejected() {
        let text = format!("{MINIMAL_JOB}\n[gearing]\nstages = 0\n");
        let err = DesignJob::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "gearing.stages"
        ));
    }

    #[test]
    fn out_of_range_motor_efficiency_rejected() {
        let text = format!("{MINIMAL_JOB}\n[gearing]\nmotor_efficiency = 1.2\n");
        let err = DesignJob::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "gearing.motor_efficiency"
        ));
    }

    #[test]
    fn job_round_trips_through_toml() {
        let job = DesignJob::from_toml_str(FULL_JOB).unwrap();
        let text = toml::to_string(&job).unwrap();
        let back = DesignJob::from_toml_str(&text).unwrap();
        assert_eq!(job, back);
    }
}
