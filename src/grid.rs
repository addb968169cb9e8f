//! Uniform sample grids shared by the time and frequency axes.

use core::ops::Range;

use crate::error::{ensure_positive, Parameter, Result, SignalError};

/// Relative slack applied before flooring the point count, so spans that are
/// an exact multiple of the step are not lost to a rounding ulp.
const GRID_SNAP: f64 = 8.0 * f64::EPSILON;

/// Largest number of points a grid may hold.
pub const MAX_GRID_LEN: usize = 1 << 26;

/// `start + i·step` for `i = 0..len`, `len = floor((end - start) / step)`.
///
/// `end` itself is excluded unless it is reached before `len` runs out, which
/// matches a half-open `[start, end)` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

/// Frequency axis for spectra; same layout as the time axis.
pub type FrequencyGrid = UniformGrid;

impl UniformGrid {
    /// Time axis. A bad step is reported as [`Parameter::SamplingStep`].
    pub fn time(start: f64, end: f64, step: f64) -> Result<Self> {
        Self::build(start, end, step, Parameter::SamplingStep)
    }

    /// Frequency axis. A bad step is reported as [`Parameter::GridStep`].
    pub fn frequency(start: f64, end: f64, step: f64) -> Result<Self> {
        Self::build(start, end, step, Parameter::GridStep)
    }

    fn build(start: f64, end: f64, step: f64, step_param: Parameter) -> Result<Self> {
        ensure_positive(step, step_param)?;
        if !(start.is_finite() && end.is_finite()) || end <= start {
            return Err(SignalError::InvalidParameter(Parameter::Interval));
        }
        let raw = (end - start) / step;
        let len = libm::floor(raw + raw * GRID_SNAP);
        // A span shorter than one step leaves nothing to sample.
        if len < 1.0 {
            return Err(SignalError::InvalidParameter(Parameter::Interval));
        }
        if len > MAX_GRID_LEN as f64 {
            return Err(SignalError::InvalidParameter(Parameter::Interval));
        }
        Ok(Self {
            start,
            end,
            step,
            len: len as usize,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th grid point, `start + i·step`.
    #[inline]
    pub fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.point(i))
    }

    /// Indices whose points fall in the closed range `[lo, hi]`.
    ///
    /// Works on the index axis rather than on `point(i)`, so a point meant to
    /// sit exactly on `lo` or `hi` is kept even when `start + i·step` misses
    /// it by a rounding ulp (`0.0 + 3·0.1` is `0.30000000000000004`).
    pub fn indices_within(&self, lo: f64, hi: f64) -> Range<usize> {
        let a = (lo - self.start) / self.step;
        let b = (hi - self.start) / self.step;
        let first = libm::ceil(a - snap_slack(a));
        let last = libm::floor(b + snap_slack(b));
        let len = self.len as f64;
        if !(first.is_finite() && last.is_finite()) || last < 0.0 || first >= len || last < first {
            return 0..0;
        }
        let first = if first < 0.0 { 0 } else { first as usize };
        let end = if last + 1.0 > len {
            self.len
        } else {
            last as usize + 1
        };
        first..end
    }
}

#[inline]
fn snap_slack(x: f64) -> f64 {
    GRID_SNAP * libm::fmax(libm::fabs(x), 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn exact_span_keeps_every_point() {
        let grid = UniformGrid::time(-5.0, 10.0, 0.5).unwrap();
        assert_eq!(grid.len(), 30);
        assert_eq!(grid.point(0), -5.0);
        assert_eq!(grid.point(29), 9.5);
        let fine = UniformGrid::time(-5.0, 10.0, 0.01).unwrap();
        assert_eq!(fine.len(), 1500);
    }

    #[test]
    fn partial_step_is_floored() {
        let grid = UniformGrid::frequency(0.0, 1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 3);
        let pts: Vec<f64> = grid.iter().collect();
        assert_eq!(pts.len(), 3);
    }

    #[test]
    fn rejects_bad_bounds_and_steps() {
        assert_eq!(
            UniformGrid::time(1.0, 1.0, 0.1),
            Err(SignalError::InvalidParameter(Parameter::Interval))
        );
        assert_eq!(
            UniformGrid::time(0.0, 1.0, 0.0),
            Err(SignalError::InvalidParameter(Parameter::SamplingStep))
        );
        assert_eq!(
            UniformGrid::frequency(0.0, 1.0, -0.1),
            Err(SignalError::InvalidParameter(Parameter::GridStep))
        );
        assert_eq!(
            UniformGrid::time(0.0, 0.05, 0.1),
            Err(SignalError::InvalidParameter(Parameter::Interval))
        );
        assert!(UniformGrid::time(f64::NEG_INFINITY, 0.0, 0.1).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert_eq!(
            UniformGrid::time(-5.0, 10.0, 1e-15),
            Err(SignalError::InvalidParameter(Parameter::Interval))
        );
        assert_eq!(
            UniformGrid::frequency(0.0, 1.0, 1.0 / (MAX_GRID_LEN as f64 * 2.0)),
            Err(SignalError::InvalidParameter(Parameter::Interval))
        );
    }

    #[test]
    fn indices_within_survives_rounded_points() {
        let grid = UniformGrid::time(0.0, 1.0, 0.1).unwrap();
        assert!(grid.point(3) != 0.3);
        assert_eq!(grid.indices_within(0.0, 0.3), 0..4);

        let grid = UniformGrid::time(-0.9, 3.0, 0.3).unwrap();
        assert!(grid.point(3) != 0.0);
        assert_eq!(grid.indices_within(0.0, 1.2), 3..8);
    }

    #[test]
    fn indices_within_clamps_to_grid() {
        let grid = UniformGrid::time(0.0, 5.0, 1.0).unwrap();
        assert_eq!(grid.indices_within(-10.0, 10.0), 0..5);
        assert_eq!(grid.indices_within(1.5, 1.7), 0..0);
        assert_eq!(grid.indices_within(6.0, 9.0), 0..0);
        assert_eq!(grid.indices_within(-3.0, -1.0), 0..0);
    }
}
