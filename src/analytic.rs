//! Closed-form continuous Fourier transform of the rectangular pulse.
//!
//! For the pulse `x(t) = 1/√T_p` on `[0, T_p]`,
//!
//! ```text
//! X(f) = √T_p · exp(-iπ f T_p) · sinc(f T_p),   sinc(x) = sin(πx) / (πx)
//! ```
//!
//! The exponential is the delay of the window's centre to `T_p/2`; it changes
//! only the phase, so `|X(f)| = √T_p · |sinc(f T_p)|` is even in `f`.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::error::{ensure_positive, Parameter, Result};
use crate::grid::FrequencyGrid;
use crate::num::Complex64;
use crate::signal::SpectrumSignal;

/// Normalized sinc, `sin(πx)/(πx)` with `sinc(0) = 1`.
///
/// The argument is in cycles; callers pass `f·T_p`, not `π·f·T_p`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        libm::sin(px) / px
    }
}

/// `X(f)` at a single frequency.
pub fn analytic_value(duration: f64, f: f64) -> Result<Complex64> {
    ensure_positive(duration, Parameter::Duration)?;
    Ok(pulse_spectrum(duration, libm::sqrt(duration), f))
}

#[inline]
fn pulse_spectrum(duration: f64, sqrt_duration: f64, f: f64) -> Complex64 {
    let x = f * duration;
    Complex64::expi(-PI * x).scale(sqrt_duration * sinc(x))
}

/// `X(f)` over every point of `grid`.
pub fn analytic_transform(duration: f64, grid: &FrequencyGrid) -> Result<SpectrumSignal> {
    ensure_positive(duration, Parameter::Duration)?;
    let sqrt_duration = libm::sqrt(duration);
    let frequencies: Vec<f64> = grid.iter().collect();
    let values: Vec<Complex64> = frequencies
        .iter()
        .map(|&f| pulse_spectrum(duration, sqrt_duration, f))
        .collect();
    #[cfg(feature = "verbose-logging")]
    log::debug!(
        "analytic transform T_p={} over {} bins [{}, {})",
        duration,
        values.len(),
        grid.start(),
        grid.end()
    );
    SpectrumSignal::new(frequencies, values, grid.step())
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_magnitude_even(duration in 0.01f64..20.0, f in -50.0f64..50.0) {
            let pos = analytic_value(duration, f).unwrap();
            let neg = analytic_value(duration, -f).unwrap();
            prop_assert!((pos.norm() - neg.norm()).abs() < 1e-12);
        }

        #[test]
        fn prop_magnitude_bounded_by_dc(duration in 0.01f64..20.0, f in -50.0f64..50.0) {
            let x = analytic_value(duration, f).unwrap();
            prop_assert!(x.norm() <= libm::sqrt(duration) + 1e-12);
        }
    }
}
