//! Desired output operating point for a geared drive.

use serde::{Deserialize, Serialize};

use gearwright_core::config::TargetConfig;
use gearwright_core::error::ValidationError;
use gearwright_core::units;

/// Desired output speed and torque at the gear train's output shaft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Target output speed (RPM).
    pub output_rpm: f64,
    /// Target output torque (Nm).
    pub output_torque_nm: f64,
}

impl TargetSpec {
    /// New target from output speed (RPM) and torque (Nm).
    #[must_use]
    pub const fn new(output_rpm: f64, output_torque_nm: f64) -> Self {
        Self {
            output_rpm,
            output_torque_nm,
        }
    }

    /// New target with torque given in mNm, as small-motor catalogs quote it.
    #[must_use]
    pub fn from_mnm(output_rpm: f64, output_torque_mnm: f64) -> Self {
        Self::new(output_rpm, units::mnm_to_nm(output_torque_mnm))
    }

    /// Check invariants: both speed and torque strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_rpm <= 0.0 {
            return Err(ValidationError::NonPositiveTargetSpeed);
        }
        if self.output_torque_nm <= 0.0 {
            return Err(ValidationError::NonPositiveTargetTorque);
        }
        Ok(())
    }

    /// Target output torque (mNm).
    #[must_use]
    pub fn output_torque_mnm(&self) -> f64 {
        units::nm_to_mnm(self.output_torque_nm)
    }

    /// Target mechanical output power (W).
    #[must_use]
    pub fn output_power_w(&self) -> f64 {
        self.output_torque_nm * units::rpm_to_rad_s(self.output_rpm)
    }
}

impl From<TargetConfig> for TargetSpec {
    fn from(config: TargetConfig) -> Self {
        Self::from_mnm(config.output_rpm, config.output_torque_mnm)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn valid_target_passes() {
        assert!(TargetSpec::new(100.0, 0.5).validate().is_ok());
    }

    #[test]
    fn zero_speed_rejected() {
        assert_eq!(
            TargetSpec::new(0.0, 0.5).validate(),
            Err(ValidationError::NonPositiveTargetSpeed)
        );
    }

    #[test]
    fn zero_torque_rejected() {
        assert_eq!(
            TargetSpec::new(100.0, 0.0).validate(),
            Err(ValidationError::NonPositiveTargetTorque)
        );
    }

    #[test]
    fn mnm_constructor_converts() {
        let t = TargetSpec::from_mnm(100.0, 500.0);
        assert!((t.output_torque_nm - 0.5).abs() < 1e-15);
        assert!((t.output_torque_mnm() - 500.0).abs() < 1e-12);
    }

    #[test]
    fn output_power() {
        // 0.5 Nm at 100 RPM = 0.5 · (10π/3) rad/s ≈ 5.236 W
        let t = TargetSpec::new(100.0, 0.5);
        assert!((t.output_power_w() - 0.5 * (10.0 * PI / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn from_config_converts_mnm() {
        let t = TargetSpec::from(TargetConfig {
            output_rpm: 100.0,
            output_torque_mnm: 500.0,
        });
        assert!((t.output_torque_nm - 0.5).abs() < 1e-15);
    }
}
