use serde::{Deserialize, Serialize};

/// Pipetting parameters applied to each aspirate and dispense of a liquid.
///
/// Volumes are in µL and heights in mm above the well bottom.
/// Speeds and the scaling factor are dimensionless multipliers.
///
/// Missing fields take their [`Default`] values when deserializing, so a
/// partial record only needs the parameters that differ from the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlingParameters {
    /// Air drawn into the tip after aspirating, in µL.
    pub trailing_air_gap: f64,

    /// Extra volume pushed out after dispensing, in µL.
    pub blowout: f64,

    /// Whether to prime the tip with the liquid before the real aspirate.
    pub pre_wet: bool,

    /// Multiplier on the pipette's default aspirate flow rate.
    pub aspirate_speed: f64,

    /// Multiplier on the pipette's default dispense flow rate.
    pub dispense_speed: f64,

    /// Tip height above the well bottom while aspirating, in mm.
    pub aspirate_height: f64,

    /// Tip height above the well bottom while dispensing, in mm.
    pub dispense_height: f64,

    /// Multiplier applied to the nominal volume.
    pub scaling_factor: f64,

    /// Volume added after scaling, in µL.
    pub offset: f64,
}

impl Default for HandlingParameters {
    fn default() -> Self {
        Self {
            trailing_air_gap: 0.0,
            blowout: 0.0,
            pre_wet: true,
            aspirate_speed: 1.0,
            dispense_speed: 1.0,
            aspirate_height: 0.0,
            dispense_height: 0.0,
            scaling_factor: 1.0,
            offset: 0.0,
        }
    }
}

impl HandlingParameters {
    /// Returns the volume to move so that `nominal` µL is delivered.
    ///
    /// Computed as `nominal · scaling_factor + offset`.
    #[must_use]
    pub fn corrected_volume(&self, nominal: f64) -> f64 {
        nominal * self.scaling_factor + self.offset
    }
}
