//! Gear technology kinds and single reduction stages.
//!
//! # Gear Ratio Convention
//!
//! `ratio = teeth_driven / teeth_driving` (tooth count ratio):
//! - `ratio > 1` means torque multiplication / speed reduction.
//! - Output torque = input torque × ratio × efficiency.
//! - Input speed = output speed × ratio.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gearwright_core::error::ValidationError;

/// Standard gear module sizes (mm), ascending.
pub const STANDARD_MODULES_MM: [f64; 11] = [
    0.3, 0.4, 0.5, 0.6, 0.8, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0,
];

// ---------------------------------------------------------------------------
// GearKind
// ---------------------------------------------------------------------------

/// Gear technology, with per-mesh efficiency and ratio guidelines as
/// associated constants. A closed enum so invalid tags are rejected at parse
/// time instead of defaulting silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearKind {
    /// Spur gear. Simple and cheap, audible at speed.
    #[default]
    Spur,
    /// Helical gear. Quieter, carries axial load.
    Helical,
    /// Bevel gear. Changes shaft axis direction.
    Bevel,
    /// Worm gear. Large single-stage reduction, can self-lock.
    Worm,
    /// Planetary gear set. Compact, coaxial, high torque.
    Planetary,
}

impl GearKind {
    /// All kinds, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Spur,
        Self::Helical,
        Self::Bevel,
        Self::Worm,
        Self::Planetary,
    ];

    /// Typical per-mesh efficiency.
    #[must_use]
    pub const fn efficiency(self) -> f64 {
        match self {
            Self::Spur => 0.98,
            Self::Helical => 0.97,
            Self::Bevel => 0.96,
            Self::Worm => 0.75,
            Self::Planetary => 0.97,
        }
    }

    /// Recommended maximum reduction ratio for a single stage.
    #[must_use]
    pub const fn max_stage_ratio(self) -> f64 {
        match self {
            Self::Spur => 6.0,
            Self::Helical => 8.0,
            Self::Bevel => 5.0,
            Self::Worm => 60.0,
            Self::Planetary => 10.0,
        }
    }

    /// Lowercase tag, as used in config files and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spur => "spur",
            Self::Helical => "helical",
            Self::Bevel => "bevel",
            Self::Worm => "worm",
            Self::Planetary => "planetary",
        }
    }
}

impl fmt::Display for GearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GearKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spur" => Ok(Self::Spur),
            "helical" => Ok(Self::Helical),
            "bevel" => Ok(Self::Bevel),
            "worm" => Ok(Self::Worm),
            "planetary" => Ok(Self::Planetary),
            _ => Err(ValidationError::UnknownGearKind),
        }
    }
}

// ---------------------------------------------------------------------------
// GearStage
// ---------------------------------------------------------------------------

/// One reduction stage of a gear train.
///
/// Stages are ordered by physical connection (motor side first), but only
/// the ratio product matters for the train totals. `ratio` always equals
/// `teeth_driven / teeth_driving`; physical gears have integer teeth, so the
/// ratio is the rounded integer ratio, not an ideal real-valued target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearStage {
    /// Reduction ratio (driven/driving, > 1 reduces speed).
    pub ratio: f64,
    /// Mesh efficiency (0, 1].
    pub efficiency: f64,
    /// Gear technology of this stage.
    pub kind: GearKind,
    /// Driving (pinion) tooth count.
    pub teeth_driving: u32,
    /// Driven gear tooth count.
    pub teeth_driven: u32,
    /// Gear module (mm).
    pub module_mm: f64,
}

impl GearStage {
    /// Pitch circle diameter of the driving gear (mm): `d = m·z`.
    #[must_use]
    pub fn pitch_diameter_driving(&self) -> f64 {
        self.module_mm * f64::from(self.teeth_driving)
    }

    /// Pitch circle diameter of the driven gear (mm).
    #[must_use]
    pub fn pitch_diameter_driven(&self) -> f64 {
        self.module_mm * f64::from(self.teeth_driven)
    }

    /// Tip circle diameter of the driving gear (mm): `da = d + 2m`.
    #[must_use]
    pub fn tip_diameter_driving(&self) -> f64 {
        2.0f64.mul_add(self.module_mm, self.pitch_diameter_driving())
    }

    /// Tip circle diameter of the driven gear (mm).
    #[must_use]
    pub fn tip_diameter_driven(&self) -> f64 {
        2.0f64.mul_add(self.module_mm, self.pitch_diameter_driven())
    }

    /// Root circle diameter of the driving gear (mm): `df = d − 2.5m`.
    #[must_use]
    pub fn root_diameter_driving(&self) -> f64 {
        (-2.5f64).mul_add(self.module_mm, self.pitch_diameter_driving())
    }

    /// Root circle diameter of the driven gear (mm).
    #[must_use]
    pub fn root_diameter_driven(&self) -> f64 {
        (-2.5f64).mul_add(self.module_mm, self.pitch_diameter_driven())
    }

    /// Center distance between the two gear axes (mm): `a = m·(z1 + z2) / 2`.
    #[must_use]
    pub fn center_distance(&self) -> f64 {
        self.module_mm * f64::from(self.teeth_driving + self.teeth_driven) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spur_constants() {
        assert!((GearKind::Spur.efficiency() - 0.98).abs() < f64::EPSILON);
        assert!((GearKind::Spur.max_stage_ratio() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn worm_allows_largest_single_stage() {
        let max = GearKind::ALL
            .iter()
            .map(|k| k.max_stage_ratio())
            .fold(f64::MIN, f64::max);
        assert!((GearKind::Worm.max_stage_ratio() - max).abs() < f64::EPSILON);
    }

    #[test]
    fn efficiencies_are_valid_fractions() {
        for kind in GearKind::ALL {
            let eff = kind.efficiency();
            assert!(eff > 0.0 && eff <= 1.0, "{kind} efficiency {eff}");
        }
    }

    #[test]
    fn from_str_round_trips() {
        for kind in GearKind::ALL {
            assert_eq!(kind.as_str().parse::<GearKind>().unwrap(), kind);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!(
            "cycloidal".parse::<GearKind>().unwrap_err(),
            ValidationError::UnknownGearKind
        );
    }

    #[test]
    fn default_kind_is_spur() {
        assert_eq!(GearKind::default(), GearKind::Spur);
    }

    #[test]
    fn standard_modules_ascend() {
        for pair in STANDARD_MODULES_MM.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    fn stage_82_18() -> GearStage {
        GearStage {
            ratio: 82.0 / 18.0,
            efficiency: 0.98,
            kind: GearKind::Spur,
            teeth_driving: 18,
            teeth_driven: 82,
            module_mm: 0.5,
        }
    }

    #[test]
    fn pitch_diameters() {
        let s = stage_82_18();
        assert!((s.pitch_diameter_driving() - 9.0).abs() < 1e-12);
        assert!((s.pitch_diameter_driven() - 41.0).abs() < 1e-12);
    }

    #[test]
    fn tip_and_root_diameters() {
        let s = stage_82_18();
        assert!((s.tip_diameter_driving() - 10.0).abs() < 1e-12);
        assert!((s.tip_diameter_driven() - 42.0).abs() < 1e-12);
        assert!((s.root_diameter_driving() - 7.75).abs() < 1e-12);
        assert!((s.root_diameter_driven() - 39.75).abs() < 1e-12);
    }

    #[test]
    fn center_distance_is_half_module_tooth_sum() {
        let s = stage_82_18();
        assert!((s.center_distance() - 25.0).abs() < 1e-12);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn gear_types_are_send_sync() {
        assert_send_sync::<GearKind>();
        assert_send_sync::<GearStage>();
    }
}
