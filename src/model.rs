use crate::prelude::{Config, Error, ReceiverObservation, SatelliteState, Vector3};

/// Output of the [SingleDifferenceModel] for one satellite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleDifferenceResiduals {
    /// Carrier phase residuals (observed - modeled), in meters,
    /// one per frequency band.
    pub phase_m: Vec<f64>,
    /// Pseudo range residuals (observed - modeled), in meters,
    /// one per frequency band.
    pub code_m: Vec<f64>,
    /// Line of sight unit vector, from receiver to satellite (ECEF).
    pub line_of_sight: Vector3<f64>,
    /// Azimuth angle from receiver position, in radians
    pub azimuth_rad: f64,
    /// Elevation angle from receiver position, in radians
    pub elevation_rad: f64,
    /// Carrier frequency of each band, in Hz
    pub frequencies_hz: Vec<f64>,
}

impl SingleDifferenceResiduals {
    /// Carrier phase residual (m) on this frequency band.
    pub fn phase_residual_m(&self, band: usize) -> Result<f64, Error> {
        self.phase_m
            .get(band)
            .copied()
            .ok_or(Error::MissingFrequencyBand(band))
    }

    /// Pseudo range residual (m) on this frequency band.
    pub fn code_residual_m(&self, band: usize) -> Result<f64, Error> {
        self.code_m
            .get(band)
            .copied()
            .ok_or(Error::MissingFrequencyBand(band))
    }

    /// Carrier frequency (Hz) of this band.
    pub fn frequency_hz(&self, band: usize) -> Result<f64, Error> {
        self.frequencies_hz
            .get(band)
            .copied()
            .ok_or(Error::MissingFrequencyBand(band))
    }
}

/// Any single (zero) difference observation model should implement the
/// [SingleDifferenceModel] trait, to contribute to double difference residuals.
///
/// The model predicts the raw observations of one receiver, for one satellite,
/// at the proposed receiver position, and returns the observed minus modeled
/// residuals.
///
/// Residual evaluators may run in parallel: implementations are
/// only provided shared references and must not rely on interior mutability
/// that is not thread safe.
pub trait SingleDifferenceModel {
    /// Navigation database this model draws from (ephemeris,
    /// atmospheric models..). Shared, read-only.
    type Navigation;

    /// Compute the [SingleDifferenceResiduals] of this [ReceiverObservation].
    /// ## Input
    /// - observation: raw [ReceiverObservation]
    /// - satellite: resolved [SatelliteState] (position, clock, variance, health)
    /// - navigation: navigation database
    /// - position_ecef_m: proposed receiver position (ECEF, meters)
    /// - cfg: [Config] that selects the frequency bands to output
    fn single_difference(
        &self,
        observation: &ReceiverObservation,
        satellite: &SatelliteState,
        navigation: &Self::Navigation,
        position_ecef_m: &Vector3<f64>,
        cfg: &Config,
    ) -> Result<SingleDifferenceResiduals, Error>;
}
