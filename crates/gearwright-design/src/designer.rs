//! Gear train synthesis and performance evaluation.
//!
//! # Design Pipeline
//!
//! ```text
//! MotorSpec + TargetSpec → synthesize() → [GearStage; 1..] → evaluate() → PerformanceReport
//!                          (ratio split)                     (reflected load → motor
//!                                                             operating point → margins)
//! ```
//!
//! `synthesize` distributes the required total reduction equally across the
//! fewest stages that respect the gear kind's per-stage ratio guideline,
//! then snaps each stage to integer tooth counts. `evaluate` reflects the
//! target torque back through the train losses onto the motor shaft and
//! solves the motor's operating point there.

use gearwright_core::config::DesignJob;
use gearwright_core::error::{DesignError, GearwrightError, ValidationError};
use gearwright_core::units;

use crate::gear::{GearKind, GearStage, STANDARD_MODULES_MM};
use crate::motor::MotorSpec;
use crate::report::PerformanceReport;
use crate::target::TargetSpec;

/// Driving pinion tooth count for every synthesized stage. 18 teeth keeps a
/// standard involute profile clear of undercut (practical minimum 12-18).
const DRIVING_TEETH: u32 = 18;

/// Hard ceiling for the stage-count escalation loop.
const MAX_ESCALATED_STAGES: usize = 5;

/// Required motor torque must stay within this fraction of stall torque
/// (20% headroom) for a design to be called feasible.
const STALL_UTILIZATION_LIMIT: f64 = 0.8;

/// Default assumed motor mechanical efficiency.
const DEFAULT_MOTOR_EFFICIENCY: f64 = 0.85;

// ---------------------------------------------------------------------------
// GearTrainDesigner
// ---------------------------------------------------------------------------

/// Single design session: one motor, one target, one gear technology.
///
/// Two-phase lifecycle: [`synthesize`](Self::synthesize) populates the stage
/// sequence (idempotent, re-running replaces it), then
/// [`evaluate`](Self::evaluate) reads it without mutation and may be called
/// repeatedly. Each design attempt should be a freshly constructed instance;
/// independent instances share nothing.
#[derive(Debug, Clone)]
pub struct GearTrainDesigner {
    motor: MotorSpec,
    target: TargetSpec,
    kind: GearKind,
    motor_efficiency: f64,
    stages: Vec<GearStage>,
}

impl GearTrainDesigner {
    /// New design session. Rejects invalid motor or target ratings.
    pub fn new(
        motor: MotorSpec,
        target: TargetSpec,
        kind: GearKind,
    ) -> Result<Self, ValidationError> {
        motor.validate()?;
        target.validate()?;
        Ok(Self {
            motor,
            target,
            kind,
            motor_efficiency: DEFAULT_MOTOR_EFFICIENCY,
            stages: Vec::new(),
        })
    }

    /// New design session from a validated job file.
    pub fn from_job(job: &DesignJob) -> Result<Self, GearwrightError> {
        job.validate()?;
        let kind: GearKind = job.gearing.kind.parse()?;
        let motor = MotorSpec::from(job.motor.clone());
        let target = TargetSpec::from(job.target);
        let designer =
            Self::new(motor, target, kind)?.with_motor_efficiency(job.gearing.motor_efficiency);
        Ok(designer)
    }

    /// Set the assumed motor mechanical efficiency (clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn with_motor_efficiency(mut self, efficiency: f64) -> Self {
        self.motor_efficiency = efficiency.clamp(0.0, 1.0);
        self
    }

    /// The motor under design.
    #[must_use]
    pub const fn motor(&self) -> &MotorSpec {
        &self.motor
    }

    /// The target operating point.
    #[must_use]
    pub const fn target(&self) -> &TargetSpec {
        &self.target
    }

    /// Selected gear technology.
    #[must_use]
    pub const fn kind(&self) -> GearKind {
        self.kind
    }

    /// Assumed motor mechanical efficiency.
    #[must_use]
    pub const fn motor_efficiency(&self) -> f64 {
        self.motor_efficiency
    }

    /// Synthesized stages, motor side first. Empty before synthesis.
    #[must_use]
    pub fn stages(&self) -> &[GearStage] {
        &self.stages
    }

    // -- Train reductions --

    /// Required total reduction: motor no-load speed over target speed.
    #[must_use]
    pub fn required_ratio(&self) -> f64 {
        self.motor.no_load_rpm / self.target.output_rpm
    }

    /// Achieved total reduction, the product of stage ratios (1 when empty).
    #[must_use]
    pub fn total_ratio(&self) -> f64 {
        self.stages.iter().map(|s| s.ratio).product()
    }

    /// Gear train efficiency alone, the product of stage efficiencies.
    #[must_use]
    pub fn train_efficiency(&self) -> f64 {
        self.stages.iter().map(|s| s.efficiency).product()
    }

    /// Drive-line efficiency: motor mechanical efficiency × train efficiency.
    #[must_use]
    pub fn total_efficiency(&self) -> f64 {
        self.motor_efficiency * self.train_efficiency()
    }

    /// Torque the motor must produce at its shaft for the train to deliver
    /// the target after losses (Nm).
    #[must_use]
    pub fn required_motor_torque(&self) -> f64 {
        self.target.output_torque_nm / (self.total_ratio() * self.total_efficiency())
    }

    // -- Synthesis --

    /// Synthesize the stage sequence for the required total reduction.
    ///
    /// Pass `preferred_stages` to force a stage count; it is still escalated
    /// if the per-stage ratio exceeds the kind's guideline. Re-running
    /// replaces the previous sequence deterministically.
    ///
    /// # Errors
    ///
    /// [`DesignError::InvertedRatio`] when the target speed exceeds the
    /// motor's no-load speed; the stage sequence is left empty.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn synthesize(
        &mut self,
        preferred_stages: Option<usize>,
    ) -> Result<&[GearStage], DesignError> {
        let total_ratio = self.required_ratio();
        if total_ratio < 1.0 {
            return Err(DesignError::InvertedRatio {
                required_ratio: total_ratio,
            });
        }

        let max_ratio = self.kind.max_stage_ratio();

        // ln(1) = 0 would give a zero count; floor at one stage.
        let mut count = preferred_stages
            .unwrap_or_else(|| (total_ratio.ln() / max_ratio.ln()).ceil() as usize)
            .max(1);

        // Equal split; escalate the count while one mesh cannot realize the
        // per-stage ratio. Bounded loop, never recursion.
        let mut ratio_per_stage = total_ratio.powf(1.0 / count as f64);
        while ratio_per_stage > max_ratio && count < MAX_ESCALATED_STAGES {
            count += 1;
            ratio_per_stage = total_ratio.powf(1.0 / count as f64);
        }

        let efficiency = self.kind.efficiency();

        self.stages.clear();
        for index in 0..count {
            let teeth_driven = (f64::from(DRIVING_TEETH) * ratio_per_stage).round() as u32;
            // The stage keeps the integer tooth ratio, not the ideal split:
            // downstream torque math must see what the physical gears do.
            let ratio = f64::from(teeth_driven) / f64::from(DRIVING_TEETH);

            // Later stages carry more torque and get coarser teeth.
            let module_mm =
                STANDARD_MODULES_MM[(2 + index).min(STANDARD_MODULES_MM.len() - 1)];

            self.stages.push(GearStage {
                ratio,
                efficiency,
                kind: self.kind,
                teeth_driving: DRIVING_TEETH,
                teeth_driven,
                module_mm,
            });
        }

        Ok(&self.stages)
    }

    // -- Evaluation --

    /// Evaluate whether the motor delivers the target through the
    /// synthesized train, and what it actually delivers.
    ///
    /// Pure read; call as often as needed.
    ///
    /// # Errors
    ///
    /// [`DesignError::TrainNotSynthesized`] when called before
    /// [`synthesize`](Self::synthesize) has populated the stage sequence.
    pub fn evaluate(&self) -> Result<PerformanceReport, DesignError> {
        if self.stages.is_empty() {
            return Err(DesignError::TrainNotSynthesized);
        }

        let total_ratio = self.total_ratio();
        let total_efficiency = self.total_efficiency();

        let no_load_output_rpm = self.motor.no_load_rpm / total_ratio;
        let required_motor_torque_nm = self.required_motor_torque();

        let op = self.motor.operating_point(required_motor_torque_nm);

        // Reflect the solved motor speed back through the train. The torque
        // term uses the commanded load, so output torque equals the target
        // unless the motor stalls; divergence shows up in the speed.
        let output_rpm = op.rpm / total_ratio;
        let output_torque_nm = required_motor_torque_nm * total_ratio * total_efficiency;
        let output_power_w = output_torque_nm * units::rpm_to_rad_s(output_rpm);

        let stall_nm = self.motor.stall_torque_nm();
        let torque_margin_pct = (stall_nm - required_motor_torque_nm) / stall_nm * 100.0;

        Ok(PerformanceReport {
            total_ratio,
            total_efficiency,
            no_load_output_rpm,
            required_motor_torque_nm,
            required_motor_torque_mnm: units::nm_to_mnm(required_motor_torque_nm),
            motor_rpm: op.rpm,
            motor_current_a: op.current_a,
            output_rpm,
            output_torque_nm,
            output_torque_mnm: units::nm_to_mnm(output_torque_nm),
            output_power_w,
            torque_margin_pct,
            system_efficiency: total_efficiency * op.efficiency,
            feasible: required_motor_torque_nm <= stall_nm * STALL_UTILIZATION_LIMIT,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
