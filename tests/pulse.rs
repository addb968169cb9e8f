//! Tests for pulse sampling covering boundary inclusivity and sample counts.

use pulsespec::{sample_pulse, Parameter, PulseSpec, SignalError};

#[test]
fn discrete_pulse_has_thirty_points_and_nine_on() {
    let spec = PulseSpec::new(4.0, -5.0, 10.0, 0.5).unwrap();
    let signal = sample_pulse(&spec).unwrap();
    assert_eq!(signal.len(), 30);
    assert_eq!(signal.times()[0], -5.0);
    assert_eq!(signal.times()[29], 9.5);

    let on: Vec<f64> = signal
        .iter()
        .filter(|&(_, x)| x != 0.0)
        .map(|(t, _)| t)
        .collect();
    let expected: Vec<f64> = (0..=8).map(|i| i as f64 * 0.5).collect();
    assert_eq!(on, expected);
    assert!(signal
        .iter()
        .filter(|&(_, x)| x != 0.0)
        .all(|(_, x)| x == 0.5));
}

#[test]
fn edges_are_exact_and_just_after_is_off() {
    for &(duration, step) in &[(4.0, 0.5), (1.0, 0.25), (2.0, 0.125)] {
        let spec = PulseSpec::new(duration, -2.0, duration + 2.0, step).unwrap();
        let signal = spec.sample().unwrap();
        let height = 1.0 / f64::sqrt(duration);
        assert_eq!(signal.amplitude_at(0.0), Some(height));
        assert_eq!(signal.amplitude_at(duration), Some(height));
        assert_eq!(signal.amplitude_at(duration + step), Some(0.0));
        assert_eq!(signal.amplitude_at(-step), Some(0.0));
    }
}

#[test]
fn decimal_steps_hit_both_edges() {
    for &(duration, start, end, step) in &[
        (0.3, 0.0, 1.0, 0.1),
        (1.2, -0.9, 3.0, 0.3),
        (0.7, -0.3, 1.5, 0.1),
        (4.0, -5.0, 10.0, 0.01),
    ] {
        let signal = PulseSpec::new(duration, start, end, step)
            .unwrap()
            .sample()
            .unwrap();
        let height = 1.0 / f64::sqrt(duration);
        let expected = (duration / step).round() as usize + 1;
        assert_eq!(signal.nonzero_count(), expected, "T_p={} step={}", duration, step);
        assert_eq!(signal.amplitude_at(0.0), Some(height));
        assert_eq!(signal.amplitude_at(duration), Some(height));
        assert_eq!(signal.amplitude_at(duration + step), Some(0.0));
        assert!(signal.amplitude_at(-step).map_or(true, |x| x == 0.0));
    }
}

#[test]
fn continuous_resolution_has_unit_energy() {
    let spec = PulseSpec::new(4.0, -5.0, 10.0, 0.01).unwrap();
    let signal = spec.sample().unwrap();
    assert_eq!(signal.len(), 1500);
    // Riemann sum over [0, T_p] overshoots by at most one step's worth.
    assert!((signal.energy() - 1.0).abs() < 0.01, "energy {}", signal.energy());
}

#[test]
fn invalid_parameters_fail() {
    assert_eq!(
        PulseSpec::new(0.0, -5.0, 10.0, 0.5),
        Err(SignalError::InvalidParameter(Parameter::Duration))
    );
    assert_eq!(
        PulseSpec::new(4.0, -5.0, 10.0, 0.0),
        Err(SignalError::InvalidParameter(Parameter::SamplingStep))
    );
    assert_eq!(
        PulseSpec::new(4.0, 10.0, -5.0, 0.5),
        Err(SignalError::InvalidParameter(Parameter::Interval))
    );
    let spec = PulseSpec::new(4.0, -5.0, 10.0, 0.5).unwrap();
    assert_eq!(
        spec.with_step(-0.5),
        Err(SignalError::InvalidParameter(Parameter::SamplingStep))
    );
}
