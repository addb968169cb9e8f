//! Value types handed from the pipeline stages to the presentation layer.
//!
//! Every type here is produced fresh by one computation and never mutated
//! afterwards. Axis and value arrays are always the same length.

use alloc::vec::Vec;

use crate::error::{ensure_positive, Parameter, Result, SignalError};
use crate::num::Complex64;

/// Real-valued samples on a uniform time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    times: Vec<f64>,
    amplitudes: Vec<f64>,
    step: f64,
}

impl SampledSignal {
    pub fn new(times: Vec<f64>, amplitudes: Vec<f64>, step: f64) -> Result<Self> {
        ensure_positive(step, Parameter::SamplingStep)?;
        if times.len() != amplitudes.len() {
            return Err(SignalError::InvalidParameter(Parameter::MismatchedLengths));
        }
        Ok(Self {
            times,
            amplitudes,
            step,
        })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `(time, amplitude)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }

    /// Amplitude at the sample nearest to `t`, if `t` lies on the axis.
    pub fn amplitude_at(&self, t: f64) -> Option<f64> {
        let first = *self.times.first()?;
        let idx = libm::round((t - first) / self.step);
        if !idx.is_finite() || idx < 0.0 {
            return None;
        }
        self.amplitudes.get(idx as usize).copied()
    }

    /// Number of samples with a non-zero amplitude.
    pub fn nonzero_count(&self) -> usize {
        self.amplitudes.iter().filter(|&&a| a != 0.0).count()
    }

    /// Riemann-sum energy `Σ |x|² · step`.
    pub fn energy(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum::<f64>() * self.step
    }
}

/// Complex amplitudes on a uniform frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumSignal {
    frequencies: Vec<f64>,
    values: Vec<Complex64>,
    step: f64,
}

impl SpectrumSignal {
    pub fn new(frequencies: Vec<f64>, values: Vec<Complex64>, step: f64) -> Result<Self> {
        ensure_positive(step, Parameter::GridStep)?;
        if frequencies.len() != values.len() {
            return Err(SignalError::InvalidParameter(Parameter::MismatchedLengths));
        }
        Ok(Self {
            frequencies,
            values,
            step,
        })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Frequency grid step `f_s`.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.norm()).collect()
    }

    /// Phase in radians, recomputed from each complex value.
    pub fn phase(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.arg()).collect()
    }

    pub fn real(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.re).collect()
    }

    pub fn imag(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.im).collect()
    }

    /// Same axis, every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            frequencies: self.frequencies.clone(),
            values: self.values.iter().map(|v| v.scale(factor)).collect(),
            step: self.step,
        }
    }
}

/// DFT coefficients paired with their signed frequency bins.
///
/// Coefficients are in transform order (`k = 0..N`); `frequencies[k]` follows
/// the fftfreq convention, so the upper half of the array holds negative bins.
#[derive(Debug, Clone, PartialEq)]
pub struct DftResult {
    frequencies: Vec<f64>,
    coefficients: Vec<Complex64>,
}

impl DftResult {
    pub fn new(frequencies: Vec<f64>, coefficients: Vec<Complex64>) -> Result<Self> {
        if frequencies.len() != coefficients.len() {
            return Err(SignalError::InvalidParameter(Parameter::MismatchedLengths));
        }
        Ok(Self {
            frequencies,
            coefficients,
        })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }

    pub fn magnitude(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.norm()).collect()
    }

    /// Reorder so bins ascend from `-1/(2T_s)` (fftshift).
    pub fn shifted(&self) -> Self {
        let n = self.len();
        // Index of the first negative bin; fftfreq puts it at ceil(n/2).
        let split = n.div_ceil(2);
        Self {
            frequencies: rotate_left(&self.frequencies, split),
            coefficients: rotate_left(&self.coefficients, split),
        }
    }
}

fn rotate_left<T: Copy>(v: &[T], split: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(v.len());
    out.extend_from_slice(&v[split..]);
    out.extend_from_slice(&v[..split]);
    out
}
