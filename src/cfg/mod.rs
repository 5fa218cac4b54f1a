use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::constants::MAX_FREQUENCIES;

mod ionosphere;
pub use ionosphere::IonosphereStrategy;

/// Configuration Error
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid number of frequencies: {0} (1..={max})", max = MAX_FREQUENCIES)]
    InvalidFrequencies(usize),

    #[error("unknown ionosphere strategy")]
    UnknownIonosphereStrategy,
}

fn default_frequencies() -> usize {
    1
}

/// Residual evaluation [Config]uration, shared (read only)
/// by all residual evaluators of one optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Number of carrier frequencies being processed.
    #[cfg_attr(feature = "serde", serde(default = "default_frequencies"))]
    pub frequencies: usize,

    /// [IonosphereStrategy]
    #[cfg_attr(feature = "serde", serde(default))]
    pub ionosphere: IonosphereStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequencies: default_frequencies(),
            ionosphere: IonosphereStrategy::default(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated number of frequencies.
    pub fn with_frequencies(&self, frequencies: usize) -> Self {
        let mut s = self.clone();
        s.frequencies = frequencies;
        s
    }

    /// Copies and returns [Config] with updated [IonosphereStrategy].
    pub fn with_ionosphere(&self, ionosphere: IonosphereStrategy) -> Self {
        let mut s = self.clone();
        s.ionosphere = ionosphere;
        s
    }

    /// Number of frequency bands output by the single difference model.
    pub fn num_frequencies(&self) -> usize {
        match self.ionosphere {
            IonosphereStrategy::IonosphereFree => 1,
            _ => self.frequencies,
        }
    }

    /// Verifies this [Config] is valid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.frequencies == 0 || self.frequencies > MAX_FREQUENCIES {
            return Err(Error::InvalidFrequencies(self.frequencies));
        }
        Ok(())
    }
}
