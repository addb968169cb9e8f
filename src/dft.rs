//! Discrete Fourier transform of a finite sampled sequence.
//!
//! `X_k = Σ_{n=0}^{N-1} x_n · exp(-2πi·k·n/N)` is computed with the crate's
//! FFT, so any `N >= 1` runs in `O(N log N)`. Bin `k` sits at `k/(N·T_s)`,
//! remapped into `[-1/(2T_s), 1/(2T_s))` the way numpy's `fftfreq` does.

use alloc::vec::Vec;

use crate::error::{ensure_positive, Parameter, Result, SignalError};
use crate::fft::{FftImpl, ScalarFftImpl};
use crate::num::{real_to_complex, Complex64};
use crate::signal::{DftResult, SampledSignal};

/// Signed frequency of each DFT bin for `n` samples spaced `sampling_period`.
///
/// Bins `0..ceil(n/2)` are non-negative; the rest are `(k - n)/(n·T_s)`.
pub fn fft_frequencies(n: usize, sampling_period: f64) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(SignalError::InvalidParameter(Parameter::EmptyInput));
    }
    ensure_positive(sampling_period, Parameter::SamplingPeriod)?;
    let span = n as f64 * sampling_period;
    let positive = n.div_ceil(2);
    Ok((0..n)
        .map(|k| {
            if k < positive {
                k as f64 / span
            } else {
                -((n - k) as f64) / span
            }
        })
        .collect())
}

/// DFT of a sampled signal, using its own step as `T_s`.
pub fn dft(signal: &SampledSignal) -> Result<DftResult> {
    dft_samples(signal.amplitudes(), signal.step())
}

/// DFT of raw real samples spaced `sampling_period` apart.
pub fn dft_samples(samples: &[f64], sampling_period: f64) -> Result<DftResult> {
    let frequencies = fft_frequencies(samples.len(), sampling_period)?;
    let mut buf = real_to_complex(samples);
    let fft = ScalarFftImpl::<f64>::default();
    fft.fft(&mut buf)?;
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "dft of {} samples at T_s={} ({})",
        samples.len(),
        sampling_period,
        if samples.len().is_power_of_two() {
            "radix-2"
        } else {
            "bluestein"
        }
    );
    DftResult::new(frequencies, buf)
}

/// Direct `O(N²)` evaluation of the DFT sum.
///
/// Reference implementation for checking the fast path; the phase index
/// `k·n mod N` is reduced before scaling so large `N` keeps its accuracy.
pub fn dft_naive(samples: &[f64]) -> Result<Vec<Complex64>> {
    let n = samples.len();
    if n == 0 {
        return Err(SignalError::InvalidParameter(Parameter::EmptyInput));
    }
    let step = -2.0 * core::f64::consts::PI / n as f64;
    Ok((0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                .fold(Complex64::zero(), |acc, (j, &x)| {
                    let phase = step * ((k * j) % n) as f64;
                    acc + Complex64::expi(phase).scale(x)
                })
        })
        .collect())
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fast_matches_naive(ref samples in proptest::collection::vec(-100.0f64..100.0, 1..80)) {
            let fast = dft_samples(samples, 1.0).unwrap();
            let slow = dft_naive(samples).unwrap();
            prop_assert_eq!(fast.len(), samples.len());
            for (a, b) in fast.coefficients().iter().zip(slow.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-7);
                prop_assert!((a.im - b.im).abs() < 1e-7);
            }
        }
    }
}
