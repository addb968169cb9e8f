//! Tests for the closed-form transform of the rectangular pulse.

use pulsespec::{analytic_transform, analytic_value, sinc, FrequencyGrid, Parameter, SignalError};

const EPSILON: f64 = 1e-12;

#[test]
fn dc_value_matches_sqrt_duration() {
    assert_eq!(analytic_value(4.0, 0.0).unwrap().re, 2.0);
    assert_eq!(analytic_value(4.0, 0.0).unwrap().im, 0.0);
    for &tp in &[0.25, 1.0, 9.0] {
        let x = analytic_value(tp, 0.0).unwrap();
        assert_eq!(x.re, f64::sqrt(tp));
    }
}

#[test]
fn magnitude_is_even_in_frequency() {
    for &f in &[0.1, 0.37, 1.0, 2.5, 7.3] {
        let pos = analytic_value(4.0, f).unwrap();
        let neg = analytic_value(4.0, -f).unwrap();
        assert!((pos.norm() - neg.norm()).abs() < EPSILON);
        // Conjugate symmetry of a real signal's transform.
        assert!((pos.re - neg.re).abs() < EPSILON);
        assert!((pos.im + neg.im).abs() < EPSILON);
    }
}

#[test]
fn nulls_at_multiples_of_inverse_duration() {
    for k in 1..6 {
        let x = analytic_value(4.0, k as f64 / 4.0).unwrap();
        assert!(x.norm() < EPSILON, "k={} |X|={}", k, x.norm());
    }
}

#[test]
fn phase_is_linear_inside_main_lobe() {
    let tp = 4.0;
    let f = 0.1;
    let x = analytic_value(tp, f).unwrap();
    let expected = -core::f64::consts::PI * f * tp;
    assert!((x.arg() - expected).abs() < EPSILON);
    assert!((x.norm() - f64::sqrt(tp) * sinc(f * tp)).abs() < EPSILON);
}

#[test]
fn grid_transform_matches_pointwise() {
    let grid = FrequencyGrid::frequency(-2.0, 2.0, 0.25).unwrap();
    let spectrum = analytic_transform(4.0, &grid).unwrap();
    assert_eq!(spectrum.len(), 16);
    assert_eq!(spectrum.step(), 0.25);
    for (f, v) in spectrum.iter() {
        assert_eq!(v, analytic_value(4.0, f).unwrap());
    }
    assert_eq!(spectrum.magnitude().len(), spectrum.phase().len());
}

#[test]
fn rejects_non_positive_duration() {
    let grid = FrequencyGrid::frequency(-1.0, 1.0, 0.5).unwrap();
    assert_eq!(
        analytic_transform(-4.0, &grid),
        Err(SignalError::InvalidParameter(Parameter::Duration))
    );
}
