use crate::cfg::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Ionosphere delay compensation strategy. Defines how many frequency
/// bands the single difference model outputs.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum IonosphereStrategy {
    /// No compensation
    Off,
    /// Broadcast model: each frequency is processed independently.
    #[default]
    Broadcast,
    /// Ionosphere free combination collapses all frequencies
    /// into a single combined band.
    IonosphereFree,
}

impl std::fmt::Display for IonosphereStrategy {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Off => write!(fmt, "off"),
            Self::Broadcast => write!(fmt, "broadcast"),
            Self::IonosphereFree => write!(fmt, "iono-free"),
        }
    }
}

impl std::str::FromStr for IonosphereStrategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "broadcast" => Ok(Self::Broadcast),
            "iono-free" | "if" | "iflc" => Ok(Self::IonosphereFree),
            _ => Err(Error::UnknownIonosphereStrategy),
        }
    }
}
