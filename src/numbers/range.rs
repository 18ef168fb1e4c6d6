//! Inclusive numeric range and the slider scale used to adjust it

use crate::error::{Result, TrainerError};
use std::sync::LazyLock;

/// Largest value the word renderer covers
pub const MAX_SUPPORTED: u32 = 10_000;

/// Inclusive range `[min, max]` with `min <= max`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    min: u32,
    max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(TrainerError::InvalidRange { min, max });
        }
        Ok(ValueRange { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Upper bound every generated quantity must respect.
    /// A zero max still allows 1 so some variation remains.
    pub fn ceiling(&self) -> u32 {
        self.max.max(1)
    }

    /// Move the lower bound, dragging the upper bound along if needed
    pub fn with_min(self, min: u32) -> Self {
        ValueRange {
            min,
            max: self.max.max(min),
        }
    }

    /// Move the upper bound, dragging the lower bound along if needed
    pub fn with_max(self, max: u32) -> Self {
        ValueRange {
            min: self.min.min(max),
            max,
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange { min: 1, max: 20 }
    }
}

/// Slider stops: 1..=10, tens to 100, hundreds to 1000, thousands to 10000
pub static SLIDER_SCALE: LazyLock<Vec<u32>> = LazyLock::new(|| {
    (1..=10)
        .chain((20..=100).step_by(10))
        .chain((200..=1000).step_by(100))
        .chain((2000..=MAX_SUPPORTED).step_by(1000))
        .collect()
});

/// Index of the largest stop not above `value` (0 when below every stop)
pub fn scale_index(value: u32) -> usize {
    SLIDER_SCALE
        .iter()
        .rposition(|&stop| stop <= value)
        .unwrap_or(0)
}

/// Move `value` by `delta` stops along the scale, saturating at both ends
pub fn step_on_scale(value: u32, delta: i32) -> u32 {
    let last = SLIDER_SCALE.len() - 1;
    let index = scale_index(value) as i64 + i64::from(delta);
    SLIDER_SCALE[index.clamp(0, last as i64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(ValueRange::new(5, 5).is_ok());
        assert!(matches!(
            ValueRange::new(6, 5),
            Err(TrainerError::InvalidRange { min: 6, max: 5 })
        ));
    }

    #[test]
    fn test_moving_one_bound_clamps_the_other() {
        let range = ValueRange::new(10, 20).unwrap();
        assert_eq!(range.with_min(50), ValueRange::new(50, 50).unwrap());
        assert_eq!(range.with_max(5), ValueRange::new(5, 5).unwrap());
        assert_eq!(range.with_min(15), ValueRange::new(15, 20).unwrap());
    }

    #[test]
    fn test_ceiling_never_zero() {
        assert_eq!(ValueRange::new(0, 0).unwrap().ceiling(), 1);
        assert_eq!(ValueRange::new(0, 7).unwrap().ceiling(), 7);
    }

    #[test]
    fn test_slider_scale_stops() {
        assert_eq!(SLIDER_SCALE.len(), 10 + 9 + 9 + 9);
        assert_eq!(SLIDER_SCALE.first(), Some(&1));
        assert_eq!(SLIDER_SCALE[10], 20);
        assert_eq!(SLIDER_SCALE.last(), Some(&10_000));
        assert!(SLIDER_SCALE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_step_saturates_and_snaps() {
        assert_eq!(step_on_scale(1, -1), 1);
        assert_eq!(step_on_scale(10, 1), 20);
        assert_eq!(step_on_scale(10_000, 3), 10_000);
        // 25 is off the scale: it snaps down to 20 before stepping
        assert_eq!(step_on_scale(25, 1), 30);
        assert_eq!(step_on_scale(0, 0), 1);
    }
}
