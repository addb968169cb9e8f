//! Tests for spectral replica synthesis on finite grids.

use pulsespec::{
    analytic_transform, replica_shift, roll, synthesize_replicas, Complex64, FrequencyGrid,
    Parameter, SignalError, SpectrumSignal,
};

fn wide_spectrum() -> SpectrumSignal {
    let grid = FrequencyGrid::frequency(-10.0, 10.0, 0.01).unwrap();
    analytic_transform(4.0, &grid).unwrap()
}

#[test]
fn zero_replicas_is_scaled_baseband() {
    let x = wide_spectrum();
    let out = synthesize_replicas(&x, 0.5, 0).unwrap();
    assert_eq!(out, x.scaled(1.0 / 0.5));
}

#[test]
fn replicas_are_periodic_in_sampling_rate() {
    let x = wide_spectrum();
    let ts = 0.5;
    let out = synthesize_replicas(&x, ts, 2).unwrap();
    assert_eq!(out.len(), x.len());
    assert_eq!(out.frequencies(), x.frequencies());
    // One period is 1/T_s = 2 Hz = 200 bins. Away from the window edges the
    // summed spectrum repeats with that period up to the truncated tails.
    let centre = out.len() / 2;
    let a = out.values()[centre + 10];
    let b = out.values()[centre + 10 + 200];
    assert!((a.norm() - b.norm()).abs() < 0.1 * a.norm());
}

#[test]
fn dc_of_replica_sum_adds_replica_nulls() {
    // With T_p = 4 and T_s = 0.5, k/T_s = 2k Hz are nulls of sinc(4f), so the
    // DC value of the sum equals the scaled baseband DC value.
    let x = wide_spectrum();
    let out = synthesize_replicas(&x, 0.5, 2).unwrap();
    let centre = x.frequencies().iter().position(|&f| f.abs() < 1e-9).unwrap();
    let expected = x.values()[centre].scale(2.0);
    assert!((out.values()[centre].re - expected.re).abs() < 1e-9);
    assert!((out.values()[centre].im - expected.im).abs() < 1e-9);
}

#[test]
fn shifts_wrap_circularly() {
    let values: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let rolled = roll(&values, 8);
    assert_eq!(rolled[2].re, 0.0);
    assert_eq!(rolled[0].re, 4.0);
    assert_eq!(replica_shift(0.5 * 3.0, 0.5).unwrap(), 3);
}

#[test]
fn rejects_bad_sampling_period() {
    let x = wide_spectrum();
    assert_eq!(
        synthesize_replicas(&x, 0.0, 2),
        Err(SignalError::InvalidParameter(Parameter::SamplingPeriod))
    );
    assert_eq!(
        synthesize_replicas(&x, -1.0, 2),
        Err(SignalError::InvalidParameter(Parameter::SamplingPeriod))
    );
}

#[test]
fn rejects_empty_spectrum() {
    let empty = SpectrumSignal::new(Vec::new(), Vec::new(), 0.1).unwrap();
    assert_eq!(
        synthesize_replicas(&empty, 0.5, 1),
        Err(SignalError::InvalidParameter(Parameter::EmptyInput))
    );
}

#[test]
fn zero_grid_step_cannot_be_built() {
    assert_eq!(
        SpectrumSignal::new(vec![0.0], vec![Complex64::zero()], 0.0),
        Err(SignalError::InvalidParameter(Parameter::GridStep))
    );
    assert_eq!(
        SpectrumSignal::new(vec![0.0, 1.0], vec![Complex64::zero()], 1.0),
        Err(SignalError::InvalidParameter(Parameter::MismatchedLengths))
    );
}
