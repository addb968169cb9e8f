//! # pulsespec - Time and frequency views of a rectangular pulse
//!
//! Computes the pieces needed to compare the continuous Fourier transform,
//! the discrete-time Fourier transform and the DFT of one signal, the
//! rectangular pulse of duration `T_p` normalized to unit energy:
//!
//! - [`pulse`]: sample the pulse on a fine ("continuous") or coarse
//!   (sampling period `T_s`) time grid
//! - [`analytic`]: the closed-form transform `√T_p · e^{-iπfT_p} · sinc(fT_p)`
//! - [`replica`]: the sampled signal's spectrum as a sum of shifted copies of
//!   the analytic transform, showing aliasing
//! - [`dft`]: the DFT of the sampled sequence with signed frequency bins
//!
//! Every stage is a pure function over immutable inputs. Results are plain
//! value types ([`SampledSignal`], [`SpectrumSignal`], [`DftResult`]) that a
//! plotting layer can read magnitude, phase, real and imaginary parts from.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and [`PulseScenario::from_env`]
//! - `verbose-logging`: stage diagnostics through the `log` facade
//! - `internal-tests`: property tests backed by `proptest`
//!
//! ## Example
//!
//! ```
//! use pulsespec::{analytic_value, PulseSpec};
//!
//! let spec = PulseSpec::new(4.0, -5.0, 10.0, 0.5).unwrap();
//! let discrete = spec.sample().unwrap();
//! assert_eq!(discrete.len(), 30);
//! assert_eq!(analytic_value(4.0, 0.0).unwrap().re, 2.0);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Complex numbers and the float abstraction used by the FFT.
pub mod num;

/// Fast Fourier Transform (FFT)
///
/// Radix-2 Stockham for powers of two, Bluestein for every other length.
pub mod fft;

pub mod error;
pub mod grid;
pub mod signal;

/// Rectangular pulse definition and time-domain sampling.
pub mod pulse;

/// Closed-form continuous Fourier transform of the pulse.
pub mod analytic;

/// Spectral replicas of the sampled pulse (aliasing).
pub mod replica;

/// DFT of the sampled sequence and its frequency bins.
pub mod dft;

/// Run constants and the end-to-end driver.
pub mod config;

pub use analytic::{analytic_transform, analytic_value, sinc};
pub use config::{ConfigError, PulseScenario, ScenarioReport};
pub use dft::{dft, dft_naive, dft_samples, fft_frequencies};
pub use error::{Parameter, SignalError};
pub use fft::{FftPlanner, ScalarFftImpl};
pub use grid::{FrequencyGrid, UniformGrid};
pub use num::{Complex, Complex64, Float};
pub use pulse::{sample_pulse, PulseSpec};
pub use replica::{replica_shift, roll, synthesize_replicas};
pub use signal::{DftResult, SampledSignal, SpectrumSignal};
