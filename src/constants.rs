use anise::constants::SPEED_OF_LIGHT_KM_S;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = SPEED_OF_LIGHT_KM_S * 1000.0;

/// Maximal number of carrier frequencies a single difference model may output.
pub const MAX_FREQUENCIES: usize = 3;
