//! DC motor characteristic model and automatic reduction gear train design.
//!
//! Given a motor's datasheet ratings and a target output operating point,
//! the designer synthesizes a multi-stage gear train and verifies that the
//! motor can actually drive the target through it.
//!
//! # Design Pipeline
//!
//! ```text
//! MotorSpec + TargetSpec → GearTrainDesigner::synthesize → [GearStage]
//!                                                             │
//!                          PerformanceReport ← evaluate ──────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use gearwright_design::prelude::*;
//!
//! let motor = presets::motors::rs_385();
//! let target = presets::targets::robot_wheel();
//!
//! let mut designer = GearTrainDesigner::new(motor, target, GearKind::Spur)?;
//! designer.synthesize(None)?;
//! let report = designer.evaluate()?;
//!
//! assert!(report.feasible);
//! # Ok::<(), gearwright_core::error::GearwrightError>(())
//! ```
//!
//! All computation is closed-form and synchronous; independent designer
//! instances share nothing, so batch comparison across candidate motors is
//! safe to parallelize.

pub mod designer;
pub mod gear;
pub mod motor;
pub mod presets;
pub mod report;
pub mod target;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::designer::GearTrainDesigner;
    pub use crate::gear::{GearKind, GearStage, STANDARD_MODULES_MM};
    pub use crate::motor::{MotorSpec, OperatingPoint};
    pub use crate::presets;
    pub use crate::report::PerformanceReport;
    pub use crate::target::TargetSpec;
}
