//! Fast Fourier Transform (FFT) algorithms.
//!
//! Power-of-two lengths run through unrolled kernels (2, 4, 8) or a Stockham
//! auto-sort radix-2 pass; every other length goes through
//! [Bluestein's algorithm](https://en.wikipedia.org/wiki/Chirp_Z-transform#Bluestein's_algorithm),
//! so any `N >= 1` is supported in `O(N log N)`. A [`FftPlanner`] caches twiddle
//! and chirp tables for reuse across calls on the same engine.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use hashbrown::HashMap;

pub use crate::num::{Complex, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    EmptyInput,
    MismatchedLengths,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "input buffer is empty"),
            FftError::MismatchedLengths => write!(f, "input and output lengths differ"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

type BluesteinPair<T> = (Arc<[Complex<T>]>, Arc<[Complex<T>]>);

pub struct FftPlanner<T: Float> {
    /// Twiddle tables keyed by transform length `n`. The table for `n` has
    /// `n/2` entries `exp(-2πi k / n)`.
    cache: HashMap<usize, Arc<[Complex<T>]>>,
    /// Bluestein chirp `exp(-iπ k²/n)` and the FFT of its padded conjugate,
    /// keyed by the original length `n`.
    bluestein_cache: HashMap<usize, BluesteinPair<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            bluestein_cache: HashMap::new(),
            scratch: Vec::new(),
        }
    }

    /// Twiddle factors for a power-of-two length `n`.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        let table = self.cache.entry(n).or_insert_with(|| {
            let n_f = T::from_usize(n).unwrap_or_else(T::zero);
            let two_pi = T::from_f64(2.0) * T::pi();
            let table: Vec<Complex<T>> = (0..n / 2)
                .map(|k| {
                    let k_f = T::from_usize(k).unwrap_or_else(T::zero);
                    Complex::expi(-(two_pi * k_f / n_f))
                })
                .collect();
            Arc::from(table)
        });
        Arc::clone(table)
    }

    /// Chirp and transformed kernel for a Bluestein transform of length `n`.
    pub fn get_bluestein(&mut self, n: usize) -> Result<BluesteinPair<T>, FftError> {
        if let Some(pair) = self.bluestein_cache.get(&n) {
            return Ok((Arc::clone(&pair.0), Arc::clone(&pair.1)));
        }
        let m = (2 * n - 1).next_power_of_two();
        let n_f = T::from_usize(n).unwrap_or_else(T::zero);
        let mut chirp: Vec<Complex<T>> = Vec::with_capacity(n);
        let mut b: Vec<Complex<T>> = Vec::with_capacity(m);
        for i in 0..n {
            // k² mod 2n keeps the angle small for large k.
            let sq = (i * i) % (2 * n);
            let angle = T::pi() * T::from_usize(sq).unwrap_or_else(T::zero) / n_f;
            chirp.push(Complex::expi(-angle));
            b.push(Complex::expi(angle));
        }
        b.resize(m, Complex::zero());
        for i in 1..n {
            b[m - i] = b[i];
        }
        let fft = ScalarFftImpl::<T>::default();
        fft.fft(&mut b)?;
        let pair: BluesteinPair<T> = (Arc::from(chirp), Arc::from(b));
        self.bluestein_cache
            .insert(n, (Arc::clone(&pair.0), Arc::clone(&pair.1)));
        Ok(pair)
    }
}

pub trait FftImpl<T: Float> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        output.copy_from_slice(input);
        self.fft(output)
    }
    fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        output.copy_from_slice(input);
        self.ifft(output)
    }
}

/// Scalar FFT engine. Holds its planner in a `RefCell`, so an instance is
/// meant to be owned by one computation at a time.
pub struct ScalarFftImpl<T: Float> {
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for ScalarFftImpl<T> {
    fn default() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }
}

impl<T: Float> ScalarFftImpl<T> {
    pub fn with_planner(planner: FftPlanner<T>) -> Self {
        Self {
            planner: RefCell::new(planner),
        }
    }

    pub fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = input.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }

    pub fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = input.to_vec();
        self.ifft(&mut out)?;
        Ok(out)
    }

    /// Stockham auto-sort radix-2 FFT for every power-of-two length.
    fn stockham_fft(&self, input: &mut [Complex<T>]) {
        let n = input.len();
        debug_assert!(n.is_power_of_two());
        let (twiddles, mut scratch) = {
            let mut planner = self.planner.borrow_mut();
            let twiddles = planner.get_twiddles(n);
            let scratch = core::mem::take(&mut planner.scratch);
            (twiddles, scratch)
        };
        if scratch.len() < n {
            scratch.resize(n, Complex::zero());
        }

        // n1 = number of groups, n2 = size of each group in this pass.
        let mut n1 = 1usize;
        let mut n2 = n;
        let mut result_in_input = true;
        while n1 < n {
            n2 >>= 1;
            let (src, dst): (&[Complex<T>], &mut [Complex<T>]) = if result_in_input {
                (&*input, &mut scratch[..n])
            } else {
                (&scratch[..n], &mut *input)
            };
            for k in 0..n1 {
                // exp(-2πi * k / (2*n1)) = table[k * n2]
                let w = twiddles[k * n2];
                let base0 = 2 * k * n2;
                let base1 = base0 + n2;
                let dst0 = k * n2;
                let dst1 = (k + n1) * n2;
                for j in 0..n2 {
                    let u = src[base0 + j];
                    let v = src[base1 + j].mul(w);
                    dst[dst0 + j] = u.add(v);
                    dst[dst1 + j] = u.sub(v);
                }
            }
            result_in_input = !result_in_input;
            n1 <<= 1;
        }
        if !result_in_input {
            input.copy_from_slice(&scratch[..n]);
        }

        self.planner.borrow_mut().scratch = scratch;
    }

    fn bluestein_fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        let (chirp_arc, fft_b_arc) = self.planner.borrow_mut().get_bluestein(n)?;
        let chirp = chirp_arc.as_ref();
        let fft_b = fft_b_arc.as_ref();
        let m = fft_b.len();
        let mut a: Vec<Complex<T>> = Vec::with_capacity(m);
        for (&val, &c) in input.iter().zip(chirp.iter()) {
            a.push(val.mul(c));
        }
        a.resize(m, Complex::zero());
        // m is a power of two, so this never recurses into Bluestein again.
        self.fft(&mut a)?;
        for (ai, &bi) in a.iter_mut().zip(fft_b.iter()) {
            *ai = ai.mul(bi);
        }
        self.ifft(&mut a)?;
        for ((out, &ai), &c) in input.iter_mut().zip(a.iter()).zip(chirp.iter()) {
            *out = ai.mul(c);
        }
        Ok(())
    }
}

impl<T: Float> FftImpl<T> for ScalarFftImpl<T> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        match n {
            0 => return Err(FftError::EmptyInput),
            1 => return Ok(()),
            _ if n.is_power_of_two() => self.stockham_fft(input),
            _ => {
                #[cfg(feature = "verbose-logging")]
                log::trace!("bluestein fft for n={}", n);
                return self.bluestein_fft(input);
            }
        }
        Ok(())
    }

    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if n == 1 {
            return Ok(());
        }
        for c in input.iter_mut() {
            c.im = -c.im;
        }
        self.fft(input)?;
        let scale = T::one() / T::from_usize(n).unwrap_or_else(T::one);
        for c in input.iter_mut() {
            c.im = -c.im;
            c.re = c.re * scale;
            c.im = c.im * scale;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn naive(input: &[Complex64]) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                let mut acc = Complex64::zero();
                for (j, &x) in input.iter().enumerate() {
                    let angle = -2.0 * core::f64::consts::PI * ((k * j) % n) as f64 / n as f64;
                    acc += x.mul(Complex64::expi(angle));
                }
                acc
            })
            .collect()
    }

    fn ramp(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new(i as f64 * 0.5 - 1.0, (i % 3) as f64))
            .collect()
    }

    #[test]
    fn matches_naive_dft_for_all_paths() {
        let fft = ScalarFftImpl::<f64>::default();
        for n in [1usize, 2, 3, 4, 5, 8, 12, 16, 30, 64, 100] {
            let input = ramp(n);
            let out = fft.fft_vec(&input).unwrap();
            let expected = naive(&input);
            for (a, b) in out.iter().zip(expected.iter()) {
                assert!((a.re - b.re).abs() < 1e-9, "n={} re {} vs {}", n, a.re, b.re);
                assert!((a.im - b.im).abs() < 1e-9, "n={} im {} vs {}", n, a.im, b.im);
            }
        }
    }

    #[test]
    fn roundtrip_non_power_of_two() {
        let fft = ScalarFftImpl::<f64>::default();
        let input = ramp(30);
        let back = fft.ifft_vec(&fft.fft_vec(&input).unwrap()).unwrap();
        for (a, b) in back.iter().zip(input.iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn planner_caches_tables() {
        let mut planner = FftPlanner::<f64>::new();
        let a = planner.get_twiddles(32);
        let b = planner.get_twiddles(32);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 16);
        let (c1, _) = planner.get_bluestein(7).unwrap();
        let (c2, _) = planner.get_bluestein(7).unwrap();
        assert!(Arc::ptr_eq(&c1, &c2));
    }

    #[test]
    fn empty_and_mismatched() {
        let fft = ScalarFftImpl::<f64>::default();
        let mut empty: Vec<Complex64> = vec![];
        assert_eq!(fft.fft(&mut empty), Err(FftError::EmptyInput));
        let input = vec![Complex64::zero(); 2];
        let mut output = vec![Complex64::zero(); 3];
        assert_eq!(
            fft.fft_out_of_place(&input, &mut output),
            Err(FftError::MismatchedLengths)
        );
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod random_tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn random_roundtrip_mixed_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        let fft = ScalarFftImpl::<f64>::default();
        for n in [3usize, 7, 16, 30, 45, 128] {
            let input: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect();
            let back = fft.ifft_vec(&fft.fft_vec(&input).unwrap()).unwrap();
            for (a, b) in back.iter().zip(input.iter()) {
                assert!((a.re - b.re).abs() < 1e-9, "n={} re {} vs {}", n, a.re, b.re);
                assert!((a.im - b.im).abs() < 1e-9, "n={} im {} vs {}", n, a.im, b.im);
            }
        }
    }
}
