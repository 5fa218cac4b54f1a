#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Error;

/// [DoubleDifference] identifies one double differenced carrier phase
/// observation, formed between a reference and a non reference satellite.
/// It is created once per epoch by the pair formation step, then consumed
/// (never mutated) by the residual evaluators.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleDifference {
    /// Reference satellite observation index
    pub reference: usize,
    /// Non reference satellite observation index
    pub non_reference: usize,
    /// Frequency band being differenced
    pub band: usize,
    /// Combined observation variance (m²)
    pub variance: f64,
}

impl std::fmt::Display for DoubleDifference {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "L{} #{} - #{} (var={})",
            self.band + 1,
            self.reference,
            self.non_reference,
            self.variance
        )
    }
}

impl DoubleDifference {
    pub fn new(reference: usize, non_reference: usize, band: usize, variance: f64) -> Self {
        Self {
            reference,
            non_reference,
            band,
            variance,
        }
    }

    /// Copies and returns [DoubleDifference] with reference and
    /// non reference satellites swapped.
    pub fn swapped(&self) -> Self {
        let mut s = *self;
        s.reference = self.non_reference;
        s.non_reference = self.reference;
        s
    }

    /// Measurement standard deviation (m), when the variance is valid.
    pub fn std_dev(&self) -> Option<f64> {
        if self.variance > 0.0 && self.variance.is_finite() {
            Some(self.variance.sqrt())
        } else {
            None
        }
    }
}

/// [DoubleDifferences] of one epoch, with their geometric
/// baseline correction terms (same indexing).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleDifferences {
    measurements: Vec<DoubleDifference>,
    baseline_corrections_m: Vec<f64>,
}

impl DoubleDifferences {
    /// Stores a new [DoubleDifference] and its baseline correction (m),
    /// returns its index.
    pub fn push(&mut self, dd: DoubleDifference, baseline_correction_m: f64) -> usize {
        self.measurements.push(dd);
        self.baseline_corrections_m.push(baseline_correction_m);
        self.measurements.len() - 1
    }

    /// [DoubleDifference] at this index
    pub fn get(&self, index: usize) -> Result<&DoubleDifference, Error> {
        self.measurements
            .get(index)
            .ok_or(Error::InvalidDoubleDifferenceIndex(index))
    }

    /// Baseline correction (m) of the [DoubleDifference] at this index
    pub fn baseline_correction_m(&self, index: usize) -> Result<f64, Error> {
        self.baseline_corrections_m
            .get(index)
            .copied()
            .ok_or(Error::MissingBaselineCorrection(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DoubleDifference> + '_ {
        self.measurements.iter()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
