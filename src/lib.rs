#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod carrier;
mod cfg;
mod constants;
mod double_diff;
mod error;
mod factor;
mod jacobian;
mod model;
mod node;
mod observer;
mod provider;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::carrier::Carrier;
    pub use crate::cfg::{Config, Error as ConfigError, IonosphereStrategy};
    pub use crate::constants::SPEED_OF_LIGHT_M_S;
    pub use crate::double_diff::{DoubleDifference, DoubleDifferences};
    pub use crate::error::Error;
    pub use crate::factor::{DdPhaseFactor, EvaluationContext};
    pub use crate::jacobian::{check_jacobian, JacobianCheck, JacobianCheckOptions};
    pub use crate::model::{SingleDifferenceModel, SingleDifferenceResiduals};
    pub use crate::node::{
        EpochNode, Observation, ReceiverObservation, SatelliteEntry, SatelliteState, SvHealth,
    };
    pub use crate::observer::{EvaluationObserver, EvaluationReport, LogObserver, NullObserver};
    pub use crate::provider::{Evaluation, JacobianRequest, ResidualProvider};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
