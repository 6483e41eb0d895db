//! Performance report produced by evaluating a synthesized gear train.

use serde::{Deserialize, Serialize};

/// System performance of a motor driving a target load through a gear train.
///
/// A plain structured record: formatting to human-readable text is the
/// reporting collaborator's job. Torques appear in both Nm and mNm because
/// small-motor work quotes either depending on magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Product of all stage ratios.
    pub total_ratio: f64,
    /// Motor mechanical efficiency × product of all stage efficiencies.
    pub total_efficiency: f64,
    /// Output speed with the motor unloaded (RPM).
    pub no_load_output_rpm: f64,
    /// Torque the motor must produce at its shaft (Nm).
    pub required_motor_torque_nm: f64,
    /// Torque the motor must produce at its shaft (mNm).
    pub required_motor_torque_mnm: f64,
    /// Motor speed at the solved operating point (RPM).
    pub motor_rpm: f64,
    /// Motor current at the solved operating point (A).
    pub motor_current_a: f64,
    /// Deliverable output speed (RPM).
    pub output_rpm: f64,
    /// Deliverable output torque (Nm).
    pub output_torque_nm: f64,
    /// Deliverable output torque (mNm).
    pub output_torque_mnm: f64,
    /// Deliverable output power (W).
    pub output_power_w: f64,
    /// Headroom before stall: `(T_stall − T_required) / T_stall × 100` (%).
    pub torque_margin_pct: f64,
    /// Gear train efficiency × motor efficiency at the operating point.
    pub system_efficiency: f64,
    /// Whether the required motor torque stays within 80% of stall torque.
    pub feasible: bool,
}
