//! Error types shared by every stage of the pipeline.

use core::fmt;

use crate::fft::FftError;

/// Precondition that an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Pulse duration `T_p` was non-positive or non-finite.
    Duration,
    /// Time sampling step was non-positive or non-finite.
    SamplingStep,
    /// Interval end was not strictly after its start, or a bound was non-finite.
    Interval,
    /// Frequency grid step was zero, negative or non-finite.
    GridStep,
    /// Sampling period `T_s` was non-positive or non-finite.
    SamplingPeriod,
    /// The sequence to transform had no samples.
    EmptyInput,
    /// Paired arrays (axis and values) had different lengths.
    MismatchedLengths,
    /// A replica shift or grid length does not fit the index type.
    ReplicaCount,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Duration => write!(f, "pulse duration must be finite and positive"),
            Parameter::SamplingStep => write!(f, "sampling step must be finite and positive"),
            Parameter::Interval => write!(f, "interval end must be finite and after its start"),
            Parameter::GridStep => {
                write!(f, "frequency grid step must be finite and positive")
            }
            Parameter::SamplingPeriod => {
                write!(f, "sampling period must be finite and positive")
            }
            Parameter::EmptyInput => write!(f, "input sequence is empty"),
            Parameter::MismatchedLengths => write!(f, "paired arrays differ in length"),
            Parameter::ReplicaCount => write!(f, "replica count or shift is out of range"),
        }
    }
}

/// Errors raised by the sampler, the transforms and the DFT engine.
///
/// There is a single kind: an input violated a precondition. These are
/// configuration errors and are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    InvalidParameter(Parameter),
}

impl SignalError {
    /// The precondition that was violated.
    pub fn parameter(&self) -> Parameter {
        match self {
            SignalError::InvalidParameter(p) => *p,
        }
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::InvalidParameter(p) => write!(f, "invalid parameter: {}", p),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignalError {}

impl From<FftError> for SignalError {
    fn from(err: FftError) -> Self {
        match err {
            FftError::EmptyInput => SignalError::InvalidParameter(Parameter::EmptyInput),
            FftError::MismatchedLengths => {
                SignalError::InvalidParameter(Parameter::MismatchedLengths)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, SignalError>;

/// Fail with `param` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(value: f64, param: Parameter) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SignalError::InvalidParameter(param))
    }
}
