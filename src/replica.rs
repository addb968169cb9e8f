//! Discrete-time spectrum of the sampled pulse, built from shifted replicas.
//!
//! Sampling with period `T_s` makes the spectrum periodic in `1/T_s`:
//!
//! ```text
//! X_s(f) = (1/T_s) · Σ_k X(f - k/T_s)
//! ```
//!
//! This module evaluates a truncated version of that sum on a finite grid.
//! Only `2K + 1` replicas are summed, and each shift is a circular roll of the
//! spectrum array by `round(k / (T_s · f_s))` bins, wrapping at the window
//! edges. The result is an approximation. It is only meaningful when the
//! frequency window is wide relative to `1/T_s`, and a shift that is not a
//! whole number of bins leaks energy into neighbouring bins. Neither effect is
//! corrected here.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ensure_positive, Parameter, Result, SignalError};
use crate::num::Complex64;
use crate::signal::SpectrumSignal;

/// Number of bins a shift of `delta_f` moves on a grid with step `grid_step`.
///
/// Rounds to the nearest bin; the fractional part is dropped on purpose.
pub fn replica_shift(delta_f: f64, grid_step: f64) -> Result<isize> {
    ensure_positive(grid_step, Parameter::GridStep)?;
    let bins = libm::round(delta_f / grid_step);
    if !bins.is_finite() || libm::fabs(bins) > isize::MAX as f64 {
        return Err(SignalError::InvalidParameter(Parameter::ReplicaCount));
    }
    Ok(bins as isize)
}

/// Circular shift: `output[(i + shift) mod n] = values[i]`.
///
/// Positive shifts move content towards higher indices, so rolling a spectrum
/// by `+s` bins evaluates `X(f - s·f_s)`.
pub fn roll(values: &[Complex64], shift: isize) -> Vec<Complex64> {
    let mut out = values.to_vec();
    if !out.is_empty() {
        let by = wrap_shift(shift, out.len());
        out.rotate_right(by);
    }
    out
}

#[inline]
fn wrap_shift(shift: isize, n: usize) -> usize {
    // n fits in isize because it is the length of an allocation.
    shift.rem_euclid(n as isize) as usize
}

/// `(1/T_s) · Σ_{k=-K}^{K} roll(X, round(k / (T_s · f_s)))`.
///
/// `spectrum` is usually the output of
/// [`analytic_transform`](crate::analytic::analytic_transform) over a window
/// much wider than `1/sampling_period`. With `replicas = 0` the result is the
/// input scaled by `1/T_s`.
///
/// # Errors
/// [`Parameter::SamplingPeriod`] if `sampling_period <= 0`,
/// [`Parameter::GridStep`] if the spectrum's grid step is not positive,
/// [`Parameter::EmptyInput`] for an empty spectrum and
/// [`Parameter::ReplicaCount`] if `replicas` does not fit a signed index.
pub fn synthesize_replicas(
    spectrum: &SpectrumSignal,
    sampling_period: f64,
    replicas: usize,
) -> Result<SpectrumSignal> {
    ensure_positive(sampling_period, Parameter::SamplingPeriod)?;
    let grid_step = spectrum.step();
    ensure_positive(grid_step, Parameter::GridStep)?;
    let values = spectrum.values();
    let n = values.len();
    if n == 0 {
        return Err(SignalError::InvalidParameter(Parameter::EmptyInput));
    }
    let k_max = isize::try_from(replicas)
        .map_err(|_| SignalError::InvalidParameter(Parameter::ReplicaCount))?;

    let mut acc = vec![Complex64::zero(); n];
    for k in -k_max..=k_max {
        let shift = replica_shift(k as f64 / sampling_period, grid_step)?;
        #[cfg(feature = "verbose-logging")]
        log::trace!("replica k={} shift={} bins", k, shift);
        for (sum, x) in acc.iter_mut().zip(roll(values, shift)) {
            *sum += x;
        }
    }

    let scale = 1.0 / sampling_period;
    let summed: Vec<Complex64> = acc.into_iter().map(|v| v.scale(scale)).collect();
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "summed {} replicas at T_s={} over {} bins",
        2 * replicas + 1,
        sampling_period,
        n
    );
    SpectrumSignal::new(spectrum.frequencies().to_vec(), summed, grid_step)
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_roll_inverse(ref re in proptest::collection::vec(-10.0f64..10.0, 1..64), shift in -200isize..200) {
            let values: Vec<Complex64> = re.iter().map(|&r| Complex64::new(r, -r)).collect();
            prop_assert_eq!(roll(&roll(&values, shift), -shift), values);
        }

        #[test]
        fn prop_zero_replicas_scales(ref re in proptest::collection::vec(-10.0f64..10.0, 1..64), ts in 0.01f64..5.0) {
            let freqs: Vec<f64> = (0..re.len()).map(|i| i as f64).collect();
            let values: Vec<Complex64> = re.iter().map(|&r| Complex64::new(r, 0.5 * r)).collect();
            let s = SpectrumSignal::new(freqs, values, 1.0).unwrap();
            prop_assert_eq!(synthesize_replicas(&s, ts, 0).unwrap(), s.scaled(1.0 / ts));
        }
    }
}
