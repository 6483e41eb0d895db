//! Common small DC motors and targets from real hobby-robotics hardware.

use crate::motor::MotorSpec;
use crate::target::TargetSpec;

/// Catalog motor specifications.
pub mod motors {
    use super::MotorSpec;

    /// Mabuchi FA-130 class (3 V toy/hobby motor).
    pub fn fa_130() -> MotorSpec {
        MotorSpec::new("FA-130", 3.0, 0.15, 2.2, 9600.0, 11.8)
            .with_dimensions(20.4, 25.1)
            .with_mass(18.0)
    }

    /// Mabuchi RS-385 class (12 V mid-size motor).
    pub fn rs_385() -> MotorSpec {
        MotorSpec::new("RS-385", 12.0, 0.08, 3.8, 7400.0, 98.0)
            .with_dimensions(28.0, 38.0)
            .with_mass(65.0)
    }
}

/// Common design targets.
pub mod targets {
    use super::TargetSpec;

    /// Small robot wheel drive: 100 RPM at 500 mNm.
    #[must_use]
    pub const fn robot_wheel() -> TargetSpec {
        TargetSpec::new(100.0, 0.5)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fa_130_is_valid() {
        let m = motors::fa_130();
        assert!(m.validate().is_ok());
        assert!((m.voltage - 3.0).abs() < f64::EPSILON);
        assert!((m.mass_g - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rs_385_is_valid() {
        let m = motors::rs_385();
        assert!(m.validate().is_ok());
        assert!((m.stall_torque_mnm - 98.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rs_385_outmuscles_fa_130() {
        assert!(
            motors::rs_385().max_mechanical_power() > motors::fa_130().max_mechanical_power()
        );
    }

    #[test]
    fn robot_wheel_is_valid() {
        let t = targets::robot_wheel();
        assert!(t.validate().is_ok());
        assert!((t.output_torque_mnm() - 500.0).abs() < 1e-12);
    }
}
