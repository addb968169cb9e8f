//! Invocation constants for one pulse demonstration and the driver that runs
//! every stage over them.
//!
//! Defaults reproduce the classic example: a 4 s pulse observed on
//! `[-5, 10)`, plotted every 10 ms, sampled every 0.5 s, with its spectrum
//! evaluated on `[-10, 10)` Hz every 0.01 Hz and two replicas per side.
//! With the `std` feature each field can be overridden from a `PULSESPEC_*`
//! environment variable.

use alloc::string::String;
use core::fmt;

use crate::analytic::analytic_transform;
use crate::dft::dft;
use crate::error::{Parameter, SignalError};
use crate::grid::FrequencyGrid;
use crate::pulse::PulseSpec;
use crate::replica::synthesize_replicas;
use crate::signal::{DftResult, SampledSignal, SpectrumSignal};

pub const ENV_DURATION: &str = "PULSESPEC_DURATION";
pub const ENV_TIME_START: &str = "PULSESPEC_TIME_START";
pub const ENV_TIME_END: &str = "PULSESPEC_TIME_END";
pub const ENV_CONTINUOUS_STEP: &str = "PULSESPEC_CONTINUOUS_STEP";
pub const ENV_SAMPLING_PERIOD: &str = "PULSESPEC_SAMPLING_PERIOD";
pub const ENV_FREQ_START: &str = "PULSESPEC_FREQ_START";
pub const ENV_FREQ_END: &str = "PULSESPEC_FREQ_END";
pub const ENV_FREQ_STEP: &str = "PULSESPEC_FREQ_STEP";
pub const ENV_REPLICAS: &str = "PULSESPEC_REPLICAS";

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An override variable was set but did not parse.
    InvalidValue { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "{} has unparsable value {:?}", var, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Every constant a demonstration run needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseScenario {
    /// Pulse duration `T_p` in seconds.
    pub duration: f64,
    pub time_start: f64,
    pub time_end: f64,
    /// Fine step standing in for continuous time.
    pub continuous_step: f64,
    /// Sampling period `T_s` of the discrete-time signal.
    pub sampling_period: f64,
    pub freq_start: f64,
    pub freq_end: f64,
    /// Frequency grid step `f_s`.
    pub freq_step: f64,
    /// Replicas summed on each side of the baseband spectrum.
    pub replicas: usize,
}

impl Default for PulseScenario {
    fn default() -> Self {
        Self {
            duration: 4.0,
            time_start: -5.0,
            time_end: 10.0,
            continuous_step: 0.01,
            sampling_period: 0.5,
            freq_start: -10.0,
            freq_end: 10.0,
            freq_step: 0.01,
            replicas: 2,
        }
    }
}

/// All outputs of one run, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub continuous: SampledSignal,
    pub discrete: SampledSignal,
    pub analytic: SpectrumSignal,
    pub replicated: SpectrumSignal,
    pub dft: DftResult,
}

impl PulseScenario {
    /// Defaults with overrides from `PULSESPEC_*` environment variables.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides from `lookup`, which maps a variable name to its
    /// value when set.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        override_field(&lookup, ENV_DURATION, &mut cfg.duration)?;
        override_field(&lookup, ENV_TIME_START, &mut cfg.time_start)?;
        override_field(&lookup, ENV_TIME_END, &mut cfg.time_end)?;
        override_field(&lookup, ENV_CONTINUOUS_STEP, &mut cfg.continuous_step)?;
        override_field(&lookup, ENV_SAMPLING_PERIOD, &mut cfg.sampling_period)?;
        override_field(&lookup, ENV_FREQ_START, &mut cfg.freq_start)?;
        override_field(&lookup, ENV_FREQ_END, &mut cfg.freq_end)?;
        override_field(&lookup, ENV_FREQ_STEP, &mut cfg.freq_step)?;
        override_field(&lookup, ENV_REPLICAS, &mut cfg.replicas)?;
        Ok(cfg)
    }

    /// The pulse at continuous (plotting) resolution.
    pub fn pulse(&self) -> Result<PulseSpec, SignalError> {
        PulseSpec::new(
            self.duration,
            self.time_start,
            self.time_end,
            self.continuous_step,
        )
    }

    pub fn frequency_grid(&self) -> Result<FrequencyGrid, SignalError> {
        FrequencyGrid::frequency(self.freq_start, self.freq_end, self.freq_step)
    }

    /// Check every constant without computing anything.
    ///
    /// Besides the per-stage checks, the sampling period must exceed the
    /// continuous step, otherwise the "discrete" signal is not coarser than
    /// the continuous one.
    pub fn validate(&self) -> Result<(), SignalError> {
        let pulse = self.pulse()?;
        pulse.with_step(self.sampling_period)?;
        if self.sampling_period <= self.continuous_step {
            return Err(SignalError::InvalidParameter(Parameter::SamplingPeriod));
        }
        self.frequency_grid()?;
        if isize::try_from(self.replicas).is_err() {
            return Err(SignalError::InvalidParameter(Parameter::ReplicaCount));
        }
        Ok(())
    }

    /// Run every stage once.
    pub fn run(&self) -> Result<ScenarioReport, SignalError> {
        self.validate()?;
        let pulse = self.pulse()?;
        let continuous = pulse.sample()?;
        let discrete = pulse.with_step(self.sampling_period)?.sample()?;
        let grid = self.frequency_grid()?;
        #[cfg(feature = "verbose-logging")]
        {
            let span = 2.0 * (self.replicas as f64) / self.sampling_period;
            if self.freq_end - self.freq_start < span {
                log::debug!(
                    "frequency window {}..{} is narrower than the replica span {}",
                    self.freq_start,
                    self.freq_end,
                    span
                );
            }
        }
        let analytic = analytic_transform(self.duration, &grid)?;
        let replicated = synthesize_replicas(&analytic, self.sampling_period, self.replicas)?;
        let dft = dft(&discrete)?;
        Ok(ScenarioReport {
            continuous,
            discrete,
            analytic,
            replicated,
            dft,
        })
    }
}

fn override_field<F, T>(lookup: &F, var: &'static str, field: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: core::str::FromStr,
{
    if let Some(raw) = lookup(var) {
        let parsed: Result<T, _> = raw.trim().parse();
        *field = parsed.map_err(|_| ConfigError::InvalidValue { var, value: raw })?;
    }
    Ok(())
}
