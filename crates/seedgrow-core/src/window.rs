//! Intensity windowing
//!
//! Wide-range scans (16- or 32-bit) are commonly clipped to a percentile
//! window and rescaled to 8 bits before seeds are drawn and the volume is
//! segmented. [`IntensityWindow`] holds such a window; values at or below
//! the lower bound map to 0 and values at or above the upper bound to 255.

use crate::error::{Error, Result};
use crate::grid::GridView;
use crate::pixel::Pixel;
use crate::volume::Volume;

/// Closed intensity interval mapped linearly onto `0..=255`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityWindow {
    low: f64,
    high: f64,
}

impl IntensityWindow {
    /// Build a window from explicit bounds.
    ///
    /// Returns `None` unless both bounds are finite and `low <= high`.
    pub fn new(low: f64, high: f64) -> Option<Self> {
        if low.is_finite() && high.is_finite() && low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Build a window from two percentiles of the image intensities.
    ///
    /// Percentiles use linear interpolation between closest ranks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the image is empty or the
    /// percentiles are outside `[0, 100]` or out of order.
    pub fn from_percentiles<T: Pixel, const D: usize>(
        image: &GridView<'_, T, D>,
        low_pct: f64,
        high_pct: f64,
    ) -> Result<Self> {
        if !(0.0..=100.0).contains(&low_pct) || !(0.0..=100.0).contains(&high_pct) {
            return Err(Error::InvalidParameter(format!(
                "percentiles must lie in [0, 100], got {} and {}",
                low_pct, high_pct
            )));
        }
        if low_pct > high_pct {
            return Err(Error::InvalidParameter(format!(
                "low percentile {} exceeds high percentile {}",
                low_pct, high_pct
            )));
        }
        if image.is_empty() {
            return Err(Error::InvalidParameter("empty image".to_string()));
        }

        let mut values: Vec<f64> = image.iter().map(|(_, v)| v.to_f64()).collect();
        values.sort_by(f64::total_cmp);

        Ok(Self {
            low: percentile_sorted(&values, low_pct),
            high: percentile_sorted(&values, high_pct),
        })
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Window width.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Map one intensity to 8 bits.
    ///
    /// A zero-width window maps everything to 0.
    pub fn eval(&self, value: f64) -> u8 {
        let width = self.width();
        if width <= 0.0 {
            return 0;
        }
        let clipped = value.clamp(self.low, self.high);
        // truncates, 255 only at the upper bound
        (255.0 * (clipped - self.low) / width) as u8
    }

    /// Map every intensity of an image to 8 bits.
    pub fn apply<T: Pixel, const D: usize>(&self, image: &GridView<'_, T, D>) -> Volume<u8, D> {
        let data = image.iter().map(|(_, v)| self.eval(v.to_f64())).collect();
        Volume::from_parts(image.shape(), data)
    }
}

/// Percentile of an ascending slice using linear interpolation.
fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Clip an image to a percentile window and rescale it to 8 bits.
///
/// # Errors
///
/// See [`IntensityWindow::from_percentiles`].
pub fn window_to_u8<T: Pixel, const D: usize>(
    image: &GridView<'_, T, D>,
    low_pct: f64,
    high_pct: f64,
) -> Result<Volume<u8, D>> {
    let window = IntensityWindow::from_percentiles(image, low_pct, high_pct)?;
    Ok(window.apply(image))
}
