use serde::{Deserialize, Serialize};
use uom::si::{
    dynamic_viscosity::centipoise,
    f64::{DynamicViscosity, MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::gram_per_cubic_centimeter,
    pressure::millimeter_of_mercury,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{DynePerCentimeter, SurfaceTension};

use super::{DEFAULT_LAB_TEMPERATURE_C, HandlingParameters, PropertyPair, ReferenceProperties};

/// Raw reference measurements for a liquid, as found in property tables.
///
/// Values are plain numbers in fixed units:
///
/// | property | unit |
/// |---|---|
/// | vapor pressure | mmHg |
/// | density | g/cm³ |
/// | surface tension | dyn/cm |
/// | viscosity | cP |
/// | lab temperature | °C |
///
/// Two field naming conventions are in use by existing callers. Each field
/// accepts its `snake_case` name (`vapor_pressure_20c`) and its `PascalCase`
/// alias (`VaporPressure20C`), and both resolve to the same field here.
/// Serialization always writes the `snake_case` names.
///
/// # Example
///
/// ```
/// use liquidlib::models::liquid::{Liquid, Measurements};
///
/// let measurements: Measurements = serde_json::from_str(r#"{
///     "VaporPressure20C": 100, "VaporPressure25C": 120,
///     "Density20C": 1.0, "Density25C": 0.98,
///     "SurfaceTension20C": 72, "SurfaceTension25C": 70,
///     "Viscosity20C": 1.0, "Viscosity25C": 0.9
/// }"#).unwrap();
///
/// let liquid = Liquid::from_measurements(&measurements);
/// assert!(liquid.handling().pre_wet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(alias = "VaporPressure20C")]
    pub vapor_pressure_20c: f64,
    #[serde(alias = "VaporPressure25C")]
    pub vapor_pressure_25c: f64,
    #[serde(alias = "Density20C")]
    pub density_20c: f64,
    #[serde(alias = "Density25C")]
    pub density_25c: f64,
    #[serde(alias = "SurfaceTension20C")]
    pub surface_tension_20c: f64,
    #[serde(alias = "SurfaceTension25C")]
    pub surface_tension_25c: f64,
    #[serde(alias = "Viscosity20C")]
    pub viscosity_20c: f64,
    #[serde(alias = "Viscosity25C")]
    pub viscosity_25c: f64,

    /// Lab temperature in °C, 22.5 when omitted.
    #[serde(alias = "LabTemperature", default = "default_lab_temperature_c")]
    pub lab_temperature: f64,

    /// Explicit handling parameters, which bypass derivation.
    #[serde(
        alias = "Handling",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub handling: Option<HandlingParameters>,
}

fn default_lab_temperature_c() -> f64 {
    DEFAULT_LAB_TEMPERATURE_C
}

impl Measurements {
    /// Converts the raw numbers into typed reference properties.
    #[must_use]
    pub fn reference(&self) -> ReferenceProperties {
        ReferenceProperties {
            vapor_pressure: PropertyPair::new(
                Pressure::new::<millimeter_of_mercury>(self.vapor_pressure_20c),
                Pressure::new::<millimeter_of_mercury>(self.vapor_pressure_25c),
            ),
            density: PropertyPair::new(
                MassDensity::new::<gram_per_cubic_centimeter>(self.density_20c),
                MassDensity::new::<gram_per_cubic_centimeter>(self.density_25c),
            ),
            surface_tension: PropertyPair::new(
                SurfaceTension::from_dyne_per_centimeter(self.surface_tension_20c),
                SurfaceTension::from_dyne_per_centimeter(self.surface_tension_25c),
            ),
            viscosity: PropertyPair::new(
                DynamicViscosity::new::<centipoise>(self.viscosity_20c),
                DynamicViscosity::new::<centipoise>(self.viscosity_25c),
            ),
        }
    }

    /// Returns the lab temperature as a typed quantity.
    #[must_use]
    pub fn lab_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.lab_temperature)
    }
}
