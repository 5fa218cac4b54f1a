use thiserror::Error;

use crate::{cfg::Error as ConfigError, prelude::SV};

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The measurement variance is used as divisor (through its square root).
    /// Building a residual evaluator from a record that is not strictly positive
    /// is a programming error in the pair formation step.
    #[error("double difference #{0}: non positive variance ({1})")]
    NonPositiveVariance(usize, f64),

    /// The [EpochNode] does not hold this double difference.
    #[error("invalid double difference index #{0}")]
    InvalidDoubleDifferenceIndex(usize),

    /// Double difference refers to an observation the [EpochNode] does not map.
    #[error("invalid observation index #{0}")]
    InvalidObservationIndex(usize),

    /// Observation maps to a satellite entry that does not exist.
    #[error("invalid satellite offset #{0}")]
    InvalidSatelliteOffset(usize),

    /// Each double difference requires its baseline correction term.
    #[error("missing baseline correction for double difference #{0}")]
    MissingBaselineCorrection(usize),

    /// Selected frequency band is not within the configured frequencies.
    #[error("invalid frequency band L{}", .0 + 1)]
    InvalidFrequencyBand(usize),

    /// The single difference model did not output the selected band.
    #[error("single difference model did not output band L{}", .0 + 1)]
    MissingFrequencyBand(usize),

    /// Optimizer proposed a wrong number of parameter blocks.
    #[error("expecting {expected} parameter blocks, got {got}")]
    ParameterBlockCount { expected: usize, got: usize },

    /// Optimizer proposed a parameter block with invalid dimension.
    #[error("parameter block #{block}: expecting dimension {expected}, got {got}")]
    ParameterBlockSize {
        block: usize,
        expected: usize,
        got: usize,
    },

    /// Residual vector does not match the declared residual dimension.
    #[error("expecting {expected} residuals, got {got}")]
    ResidualDimension { expected: usize, got: usize },

    /// Jacobian block is not shaped (residual dimension x block size).
    #[error("jacobian block #{block}: expecting {expected:?}, got {got:?}")]
    JacobianShape {
        block: usize,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// External single difference model failed for this [SV].
    #[error("single difference model failure ({0})")]
    SingleDifferenceModel(SV),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
