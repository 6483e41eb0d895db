//! Brushed DC motor specification and steady-state operating point solver.
//!
//! # Physics
//!
//! Linear torque-speed characteristic:
//! - Back-EMF: `E = Ke · ω`, with `Ke = V / ω_no_load`
//! - Torque: `T = Kt · I`, with `Kt = T_stall / I_stall`
//! - Speed under load: `ω = ω_no_load · (1 − T / T_stall)`
//! - Current under load interpolates linearly from no-load to stall.
//!
//! Loading the shaft past stall torque is a defined physical state (stalled:
//! zero speed, stall current), not an error.

use serde::{Deserialize, Serialize};

use gearwright_core::config::MotorConfig;
use gearwright_core::error::ValidationError;
use gearwright_core::units;

// ---------------------------------------------------------------------------
// MotorSpec
// ---------------------------------------------------------------------------

/// Immutable DC motor specification, as found on a catalog datasheet.
///
/// Catalog units: speed in RPM, stall torque in mNm. Derived constants and
/// the operating-point solver work in SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorSpec {
    /// Motor name or catalog model.
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
    /// Body diameter (mm). Reporting only.
    pub diameter_mm: f64,
    /// Body length (mm). Reporting only.
    pub length_mm: f64,
    /// Mass (g). Reporting only.
    pub mass_g: f64,
}

impl MotorSpec {
    /// New motor spec from electrical ratings. Physical dimensions default
    /// to zero; set them with [`with_dimensions`](Self::with_dimensions) and
    /// [`with_mass`](Self::with_mass).
    pub fn new(
        name: impl Into<String>,
        voltage: f64,
        no_load_current: f64,
        stall_current: f64,
        no_load_rpm: f64,
        stall_torque_mnm: f64,
    ) -> Self {
        Self {
            name: name.into(),
            voltage,
            no_load_current,
            stall_current,
            no_load_rpm,
            stall_torque_mnm,
            diameter_mm: 0.0,
            length_mm: 0.0,
            mass_g: 0.0,
        }
    }

    /// Set body diameter and length (mm).
    #[must_use]
    pub fn with_dimensions(mut self, diameter_mm: f64, length_mm: f64) -> Self {
        self.diameter_mm = diameter_mm;
        self.length_mm = length_mm;
        self
    }

    /// Set mass (g).
    #[must_use]
    pub fn with_mass(mut self, mass_g: f64) -> Self {
        self.mass_g = mass_g;
        self
    }

    /// Check rating invariants. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.voltage <= 0.0 {
            return Err(ValidationError::NonPositiveVoltage);
        }
        if self.no_load_current < 0.0 {
            return Err(ValidationError::NegativeNoLoadCurrent);
        }
        if self.stall_current <= self.no_load_current {
            return Err(ValidationError::StallCurrentNotAboveNoLoad);
        }
        if self.no_load_rpm <= 0.0 {
            return Err(ValidationError::NonPositiveNoLoadSpeed);
        }
        if self.stall_torque_mnm <= 0.0 {
            return Err(ValidationError::NonPositiveStallTorque);
        }
        Ok(())
    }

    // -- Derived constants --

    /// No-load angular speed (rad/s).
    #[must_use]
    pub fn no_load_speed(&self) -> f64 {
        units::rpm_to_rad_s(self.no_load_rpm)
    }

    /// Stall torque (Nm).
    #[must_use]
    pub fn stall_torque_nm(&self) -> f64 {
        units::mnm_to_nm(self.stall_torque_mnm)
    }

    /// Back-EMF constant `Ke = V / ω_no_load` (V/(rad/s)).
    #[must_use]
    pub fn back_emf_constant(&self) -> f64 {
        self.voltage / self.no_load_speed()
    }

    /// Torque constant `Kt = T_stall / I_stall` (Nm/A).
    #[must_use]
    pub fn torque_constant(&self) -> f64 {
        self.stall_torque_nm() / self.stall_current
    }

    /// Armature resistance estimate `Ra = V / I_stall` (Ω).
    #[must_use]
    pub fn armature_resistance(&self) -> f64 {
        self.voltage / self.stall_current
    }

    /// Maximum mechanical output `(T_stall / 4) · (ω_no_load / 2)` (W),
    /// the theoretical peak of the linear torque-speed line.
    #[must_use]
    pub fn max_mechanical_power(&self) -> f64 {
        (self.stall_torque_nm() / 4.0) * (self.no_load_speed() / 2.0)
    }

    // -- Operating point --

    /// Steady-state operating point at the given load torque (Nm).
    ///
    /// Past stall torque the motor is stalled: zero speed and mechanical
    /// power, full stall current. Otherwise speed and current interpolate
    /// linearly with the fractional load.
    #[must_use]
    pub fn operating_point(&self, load_torque_nm: f64) -> OperatingPoint {
        let stall_nm = self.stall_torque_nm();
        if load_torque_nm > stall_nm {
            return OperatingPoint {
                rpm: 0.0,
                current_a: self.stall_current,
                mechanical_power_w: 0.0,
                efficiency: 0.0,
            };
        }

        let load_fraction = load_torque_nm / stall_nm;
        let rpm = self.no_load_rpm * (1.0 - load_fraction);
        let current_a = (self.stall_current - self.no_load_current)
            .mul_add(load_fraction, self.no_load_current);

        let mechanical_power_w = load_torque_nm * units::rpm_to_rad_s(rpm);
        let electrical_power_w = self.voltage * current_a;
        let efficiency = if electrical_power_w > 0.0 {
            mechanical_power_w / electrical_power_w
        } else {
            0.0
        };

        OperatingPoint {
            rpm,
            current_a,
            mechanical_power_w,
            efficiency,
        }
    }
}

impl From<MotorConfig> for MotorSpec {
    fn from(config: MotorConfig) -> Self {
        Self {
            name: config.name,
            voltage: config.voltage,
            no_load_current: config.no_load_current,
            stall_current: config.stall_current,
            no_load_rpm: config.no_load_rpm,
            stall_torque_mnm: config.stall_torque_mnm,
            diameter_mm: config.diameter_mm,
            length_mm: config.length_mm,
            mass_g: config.mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// OperatingPoint
// ---------------------------------------------------------------------------

/// Steady-state motor operating point under a fixed load torque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Shaft speed (RPM).
    pub rpm: f64,
    /// Current draw (A).
    pub current_a: f64,
    /// Mechanical output power (W).
    pub mechanical_power_w: f64,
    /// Electrical efficiency (0..1). Zero when stalled or unpowered.
    pub efficiency: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
