//! Raw coordinate ranges reported by calibratable devices.

use std::fmt;

/// Bound value meaning "unset" (XInput reports it for unsupported ranges).
pub const UNSET: i32 = -1;

/// Raw min/max bounds of one device axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub const UNSET: AxisRange = AxisRange { min: UNSET, max: UNSET };

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// An axis can be calibrated unless both bounds carry the sentinel.
    pub fn is_calibratable(&self) -> bool {
        !(self.min == UNSET && self.max == UNSET)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::UNSET
    }
}

/// The two calibratable axes of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceAxes {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl DeviceAxes {
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            x: AxisRange::new(min_x, max_x),
            y: AxisRange::new(min_y, max_y),
        }
    }

    /// Overlay a precalibration: every bound that is not [`UNSET`] replaces
    /// the corresponding discovered bound.
    pub fn with_overrides(self, overrides: &DeviceAxes) -> Self {
        let pick = |over: i32, current: i32| if over != UNSET { over } else { current };
        Self::new(
            pick(overrides.x.min, self.x.min),
            pick(overrides.x.max, self.x.max),
            pick(overrides.y.min, self.y.min),
            pick(overrides.y.max, self.y.max),
        )
    }

    /// Build a precalibration from 1..=4 command-line values; missing
    /// trailing values stay unset.
    pub fn from_precalib(values: &[i32]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(UNSET);
        Self::new(at(0), at(1), at(2), at(3))
    }
}

impl fmt::Display for DeviceAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_x={}, max_x={}, min_y={}, max_y={}",
            self.x.min, self.x.max, self.y.min, self.y.max
        )
    }
}
