use crate::prelude::{Carrier, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw signal [Observation] on a given [Carrier].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// [Carrier] frequency.
    pub carrier: Carrier,
    /// Pseudo range observation, expressed in meters.
    pub pseudo_range_m: Option<f64>,
    /// Carrier phase observation, expressed in cycles.
    pub phase_range_cycles: Option<f64>,
    /// Possible SNR indication (in dB/Hz).
    pub snr_dbhz: Option<f64>,
}

impl Observation {
    /// Creates new pseudo range [Observation] (in meters), with possible
    /// SNR in dB/Hz.
    pub fn pseudo_range(carrier: Carrier, range_m: f64, snr_dbhz: Option<f64>) -> Self {
        Self {
            carrier,
            snr_dbhz,
            phase_range_cycles: None,
            pseudo_range_m: Some(range_m),
        }
    }

    /// Creates new carrier phase [Observation] (in cycles), with possible
    /// SNR in dB/Hz.
    pub fn phase_range(carrier: Carrier, cycles: f64, snr_dbhz: Option<f64>) -> Self {
        Self {
            carrier,
            snr_dbhz,
            pseudo_range_m: None,
            phase_range_cycles: Some(cycles),
        }
    }

    /// Copies and returns [Observation] with pseudo range (in meters).
    pub fn with_pseudo_range_m(&self, range_m: f64) -> Self {
        let mut s = self.clone();
        s.pseudo_range_m = Some(range_m);
        s
    }

    /// Copies and returns [Observation] with carrier phase (in cycles).
    pub fn with_phase_range_cycles(&self, cycles: f64) -> Self {
        let mut s = self.clone();
        s.phase_range_cycles = Some(cycles);
        s
    }

    /// Carrier phase converted to meters of range.
    pub fn phase_range_m(&self) -> Option<f64> {
        let cycles = self.phase_range_cycles?;
        Some(cycles * self.carrier.wavelength_m())
    }
}

/// All signals observed by one receiver, for one satellite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceiverObservation {
    /// [SV] being observed
    pub sv: SV,
    /// Signal [Observation]s, one per frequency band,
    /// sorted by band index.
    pub observations: Vec<Observation>,
}

impl ReceiverObservation {
    pub fn new(sv: SV, observations: Vec<Observation>) -> Self {
        Self { sv, observations }
    }

    /// [Observation] on this frequency band.
    pub fn band(&self, band: usize) -> Option<&Observation> {
        self.observations.get(band)
    }
}
