//! Cubic Hermite blending between two slopes.
//!
//! The polynomial is fitted on `[0, n]`: it starts at `y_first` with slope
//! `slope_first` and arrives at `y_last` with slope `slope_last` at `x = n`, one
//! step past the last sample written. When the blended segment is followed by
//! another ramp, that ramp's first sample lands exactly on `x = n`.

/// Coefficients of `c0·x³ + c1·x² + c2·x + c3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSpline {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl CubicSpline {
    /// Solves the coefficients in closed form. Slopes are per sample.
    ///
    /// `n` must be at least 1.
    #[must_use]
    pub fn fit(n: usize, y_first: f64, y_last: f64, slope_first: f64, slope_last: f64) -> Self {
        let n = n as f64;
        let n2 = n * n;
        let n3 = n2 * n;

        Self {
            c0: slope_first / n2 + 2.0 / n3 * y_first + slope_last / n2 - 2.0 / n3 * y_last,
            c1: 3.0 / n2 * y_last - slope_last / n - 2.0 / n * slope_first - 3.0 / n2 * y_first,
            c2: slope_first,
            c3: y_first,
        }
    }

    /// Polynomial value at `x`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.c0 * x * x * x + self.c1 * x * x + self.c2 * x + self.c3
    }

    /// First derivative at `x`.
    #[must_use]
    pub fn slope_at(&self, x: f64) -> f64 {
        3.0 * self.c0 * x * x + 2.0 * self.c1 * x + self.c2
    }

    /// Writes `value_at(0..out.len())` into `out`.
    pub fn sample_into(&self, out: &mut [f64]) {
        for (x, sample) in out.iter_mut().enumerate() {
            *sample = self.value_at(x as f64);
        }
    }
}

/// Fills `result` with `result.len()` samples of the cubic joining `y_first` and
/// `y_last` with the given boundary slopes.
///
/// Does nothing for an empty slice.
pub fn spline_interpolate(
    y_first: f64,
    y_last: f64,
    slope_first: f64,
    slope_last: f64,
    result: &mut [f64],
) {
    if result.is_empty() {
        return;
    }
    CubicSpline::fit(result.len(), y_first, y_last, slope_first, slope_last).sample_into(result);
}
