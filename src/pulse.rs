//! Rectangular pulse definition and its time-domain sampler.
//!
//! The pulse is `1/√T_p` on the closed interval `[0, T_p]` and zero elsewhere,
//! so its energy over the pulse duration is 1. The same [`PulseSpec`] is
//! sampled twice in a typical run: once on a fine step that stands in for the
//! continuous-time signal and once on the coarse sampling period `T_s`.

use alloc::vec::Vec;

use crate::error::{ensure_positive, Parameter, Result};
use crate::grid::UniformGrid;
use crate::signal::SampledSignal;

/// Duration, observation interval and sampling step of one rectangular pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSpec {
    duration: f64,
    grid: UniformGrid,
}

impl PulseSpec {
    /// Build a pulse of length `duration` observed on `[start, end)` every `step`.
    ///
    /// # Errors
    /// [`Parameter::Duration`] for a non-positive duration,
    /// [`Parameter::SamplingStep`] for a non-positive step and
    /// [`Parameter::Interval`] when `end <= start` or the span holds no sample.
    pub fn new(duration: f64, start: f64, end: f64, step: f64) -> Result<Self> {
        ensure_positive(duration, Parameter::Duration)?;
        let grid = UniformGrid::time(start, end, step)?;
        Ok(Self { duration, grid })
    }

    /// Same pulse and interval at a different resolution.
    pub fn with_step(&self, step: f64) -> Result<Self> {
        Self::new(self.duration, self.grid.start(), self.grid.end(), step)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn start(&self) -> f64 {
        self.grid.start()
    }

    pub fn end(&self) -> f64 {
        self.grid.end()
    }

    pub fn step(&self) -> f64 {
        self.grid.step()
    }

    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// Height of the pulse while it is on, `1/√T_p`.
    pub fn height(&self) -> f64 {
        1.0 / libm::sqrt(self.duration)
    }

    /// Closed-form pulse value. Both edges `t = 0` and `t = T_p` are on.
    #[inline]
    pub fn amplitude(&self, t: f64) -> f64 {
        if (0.0..=self.duration).contains(&t) {
            self.height()
        } else {
            0.0
        }
    }

    /// Sample the pulse on its own grid. See [`sample_pulse`].
    pub fn sample(&self) -> Result<SampledSignal> {
        sample_pulse(self)
    }
}

/// Evaluate the pulse at `t = start + i·step` for every grid index.
///
/// The on/off decision is made on grid indices, so points that land on
/// `t = 0` or `t = T_p` up to rounding get the full height even for steps
/// such as 0.1 that are not exact in binary.
pub fn sample_pulse(spec: &PulseSpec) -> Result<SampledSignal> {
    let times: Vec<f64> = spec.grid.iter().collect();
    let on = spec.grid.indices_within(0.0, spec.duration);
    let height = spec.height();
    let amplitudes: Vec<f64> = (0..times.len())
        .map(|i| if on.contains(&i) { height } else { 0.0 })
        .collect();
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "sampled pulse T_p={} step={}: {} points, {} on",
        spec.duration,
        spec.step(),
        times.len(),
        amplitudes.iter().filter(|&&a| a != 0.0).count()
    );
    SampledSignal::new(times, amplitudes, spec.step())
}
