//! Epoch node snapshot
use nalgebra::{Vector2, Vector3, Vector6};

use crate::{
    double_diff::{DoubleDifference, DoubleDifferences},
    prelude::{Epoch, Error, SV},
};

mod observation;
pub use observation::{Observation, ReceiverObservation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Satellite health flag, as broadcast. Zero means healthy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SvHealth(pub u32);

impl SvHealth {
    pub fn is_healthy(&self) -> bool {
        self.0 == 0
    }
}

/// Satellite state, resolved by the ephemeris and clock lookup.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SatelliteState {
    /// Position (m) and velocity (m/s), ECEF
    pub pos_vel_m: Vector6<f64>,
    /// Clock bias (s) and drift (s/s)
    pub clock: Vector2<f64>,
    /// Ephemeris and clock variance (m²)
    pub variance: f64,
    /// [SvHealth]
    pub health: SvHealth,
}

impl SatelliteState {
    /// Builds [SatelliteState] from ECEF position (m), velocity (m/s)
    /// and clock bias (s) and drift (s/s).
    pub fn new(
        pos_m: Vector3<f64>,
        vel_m_s: Vector3<f64>,
        clock_bias_s: f64,
        clock_drift_s_s: f64,
    ) -> Self {
        Self {
            pos_vel_m: Vector6::new(
                pos_m[0], pos_m[1], pos_m[2], vel_m_s[0], vel_m_s[1], vel_m_s[2],
            ),
            clock: Vector2::new(clock_bias_s, clock_drift_s_s),
            variance: 0.0,
            health: SvHealth::default(),
        }
    }

    /// Copies and returns [SatelliteState] with updated variance (m²).
    pub fn with_variance(&self, variance: f64) -> Self {
        let mut s = *self;
        s.variance = variance;
        s
    }

    /// Copies and returns [SatelliteState] with updated [SvHealth].
    pub fn with_health(&self, health: SvHealth) -> Self {
        let mut s = *self;
        s.health = health;
        s
    }

    /// ECEF position in meters
    pub fn position_ecef_m(&self) -> Vector3<f64> {
        Vector3::new(self.pos_vel_m[0], self.pos_vel_m[1], self.pos_vel_m[2])
    }

    /// ECEF velocity in m/s
    pub fn velocity_ecef_m_s(&self) -> Vector3<f64> {
        Vector3::new(self.pos_vel_m[3], self.pos_vel_m[4], self.pos_vel_m[5])
    }

    /// Clock bias in seconds
    pub fn clock_bias_s(&self) -> f64 {
        self.clock[0]
    }
}

/// One satellite, as observed by the rover at this epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteEntry {
    /// [SV] identity
    pub sv: SV,
    /// [SatelliteState]
    pub state: SatelliteState,
    /// Raw [ReceiverObservation]
    pub observation: ReceiverObservation,
}

impl SatelliteEntry {
    pub fn new(state: SatelliteState, observation: ReceiverObservation) -> Self {
        Self {
            sv: observation.sv,
            state,
            observation,
        }
    }
}

/// [EpochNode] gathers everything the residual evaluators need for one epoch.
/// It is built once per epoch and remains read-only for the duration of
/// the optimization, so it can be shared across evaluators and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochNode {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Epoch counter
    pub index: usize,
    satellites: Vec<SatelliteEntry>,
    rover: Vec<usize>,
    double_differences: DoubleDifferences,
}

impl EpochNode {
    /// Creates a new empty [EpochNode]
    pub fn new(epoch: Epoch, index: usize) -> Self {
        Self {
            epoch,
            index,
            rover: Default::default(),
            satellites: Default::default(),
            double_differences: Default::default(),
        }
    }

    /// Stores a new [SatelliteEntry], returns its offset in the satellite table.
    pub fn push_satellite(&mut self, entry: SatelliteEntry) -> usize {
        self.satellites.push(entry);
        self.satellites.len() - 1
    }

    /// Maps a new rover observation to this satellite table offset,
    /// returns the observation index.
    pub fn push_rover(&mut self, offset: usize) -> Result<usize, Error> {
        if offset >= self.satellites.len() {
            return Err(Error::InvalidSatelliteOffset(offset));
        }
        self.rover.push(offset);
        Ok(self.rover.len() - 1)
    }

    /// Stores a new [DoubleDifference] along its baseline correction (m),
    /// returns its index.
    pub fn push_double_difference(
        &mut self,
        dd: DoubleDifference,
        baseline_correction_m: f64,
    ) -> Result<usize, Error> {
        self.rover_satellite(dd.reference)?;
        self.rover_satellite(dd.non_reference)?;
        Ok(self.double_differences.push(dd, baseline_correction_m))
    }

    /// Copies and returns [EpochNode] with a new rover [SatelliteEntry].
    pub fn with_rover_satellite(&self, entry: SatelliteEntry) -> Self {
        let mut s = self.clone();
        let offset = s.push_satellite(entry);
        s.rover.push(offset);
        s
    }

    /// Copies and returns [EpochNode] with a new [DoubleDifference].
    pub fn with_double_difference(
        &self,
        dd: DoubleDifference,
        baseline_correction_m: f64,
    ) -> Result<Self, Error> {
        let mut s = self.clone();
        s.push_double_difference(dd, baseline_correction_m)?;
        Ok(s)
    }

    /// [SatelliteEntry] observed by the rover, at this observation index.
    pub fn rover_satellite(&self, obs_index: usize) -> Result<&SatelliteEntry, Error> {
        let offset = self
            .rover
            .get(obs_index)
            .ok_or(Error::InvalidObservationIndex(obs_index))?;

        self.satellites
            .get(*offset)
            .ok_or(Error::InvalidSatelliteOffset(*offset))
    }

    /// [DoubleDifference] at this index.
    pub fn double_difference(&self, index: usize) -> Result<&DoubleDifference, Error> {
        self.double_differences.get(index)
    }

    /// Geometric baseline correction (m) of the [DoubleDifference] at this index.
    pub fn baseline_correction_m(&self, index: usize) -> Result<f64, Error> {
        self.double_differences.baseline_correction_m(index)
    }

    /// [DoubleDifferences] of this epoch.
    pub fn double_differences(&self) -> &DoubleDifferences {
        &self.double_differences
    }

    /// Number of rover observations.
    pub fn num_observations(&self) -> usize {
        self.rover.len()
    }
}
