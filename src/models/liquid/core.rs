//! Temperature interpolation and handling-parameter derivation for one liquid.
//!
//! A [`Liquid`] is built once from reference measurements at 20 °C and 25 °C
//! and a lab temperature. Construction interpolates the four physical
//! properties to the lab temperature and then either keeps caller-supplied
//! [`HandlingParameters`] unchanged or derives them with [`HandlingRules`].
//! Nothing changes after construction.

mod handling;
mod measurements;
mod properties;
mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use handling::HandlingParameters;
pub use measurements::Measurements;
pub use properties::{PhysicalProperties, PropertyPair, ReferenceProperties};
pub use rules::HandlingRules;

use tracing::debug;
use uom::si::{
    dynamic_viscosity::centipoise,
    f64::{DynamicViscosity, MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::gram_per_cubic_centimeter,
    pressure::millimeter_of_mercury,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{DynePerCentimeter, SurfaceTension};

/// Lab temperature used when none is given, in °C.
pub const DEFAULT_LAB_TEMPERATURE_C: f64 = 22.5;

/// Returns [`DEFAULT_LAB_TEMPERATURE_C`] as a typed temperature.
#[must_use]
pub fn default_lab_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(DEFAULT_LAB_TEMPERATURE_C)
}

/// A liquid evaluated at a lab temperature, with its handling parameters.
///
/// # Example
///
/// ```
/// use liquidlib::models::liquid::{Liquid, Measurements};
/// use uom::si::{mass_density::gram_per_cubic_centimeter, pressure::millimeter_of_mercury};
///
/// let liquid = Liquid::from_measurements(&Measurements {
///     vapor_pressure_20c: 100.0,
///     vapor_pressure_25c: 120.0,
///     density_20c: 1.0,
///     density_25c: 0.98,
///     surface_tension_20c: 72.0,
///     surface_tension_25c: 70.0,
///     viscosity_20c: 1.0,
///     viscosity_25c: 0.9,
///     lab_temperature: 22.5,
///     handling: None,
/// });
///
/// assert!((liquid.vapor_pressure().get::<millimeter_of_mercury>() - 110.0).abs() < 1e-9);
/// assert!((liquid.density().get::<gram_per_cubic_centimeter>() - 0.99).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    lab_temperature: ThermodynamicTemperature,
    properties: PhysicalProperties,
    handling: HandlingParameters,
}

impl Liquid {
    /// Evaluates a liquid at the default lab temperature with derived handling.
    #[must_use]
    pub fn new(reference: ReferenceProperties) -> Self {
        Self::builder(reference).build()
    }

    /// Starts building a liquid from its reference properties.
    pub fn builder(reference: ReferenceProperties) -> LiquidBuilder {
        LiquidBuilder {
            reference,
            lab_temperature: default_lab_temperature(),
            handling: None,
            rules: HandlingRules::default(),
        }
    }

    /// Builds a liquid from raw table measurements.
    #[must_use]
    pub fn from_measurements(measurements: &Measurements) -> Self {
        let builder = Self::builder(measurements.reference())
            .lab_temperature(measurements.lab_temperature());

        match measurements.handling {
            Some(handling) => builder.handling(handling).build(),
            None => builder.build(),
        }
    }

    /// Returns the temperature the properties were evaluated at.
    #[must_use]
    pub fn lab_temperature(&self) -> ThermodynamicTemperature {
        self.lab_temperature
    }

    /// Returns all interpolated properties.
    #[must_use]
    pub fn properties(&self) -> &PhysicalProperties {
        &self.properties
    }

    /// Returns the handling parameters, either supplied or derived.
    #[must_use]
    pub fn handling(&self) -> &HandlingParameters {
        &self.handling
    }

    #[must_use]
    pub fn vapor_pressure(&self) -> Pressure {
        self.properties.vapor_pressure
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.properties.density
    }

    #[must_use]
    pub fn surface_tension(&self) -> SurfaceTension {
        self.properties.surface_tension
    }

    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.properties.viscosity
    }
}

/// Builder for [`Liquid`].
///
/// Defaults to the 22.5 °C lab temperature, derived handling, and
/// [`HandlingRules::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct LiquidBuilder {
    reference: ReferenceProperties,
    lab_temperature: ThermodynamicTemperature,
    handling: Option<HandlingParameters>,
    rules: HandlingRules,
}

impl LiquidBuilder {
    /// Evaluates the properties at this temperature instead of 22.5 °C.
    pub fn lab_temperature(mut self, lab_temperature: ThermodynamicTemperature) -> Self {
        self.lab_temperature = lab_temperature;
        self
    }

    /// Uses these parameters as-is instead of deriving them.
    ///
    /// Supplied parameters are not checked against the derived ranges.
    pub fn handling(mut self, handling: HandlingParameters) -> Self {
        self.handling = Some(handling);
        self
    }

    /// Derives handling with these rules. Ignored when handling is supplied.
    pub fn rules(mut self, rules: HandlingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Interpolates the properties and derives handling unless it was supplied.
    #[must_use]
    pub fn build(self) -> Liquid {
        let properties = self.reference.at(self.lab_temperature);

        let handling = self.handling.unwrap_or_else(|| {
            let handling = self.rules.derive(&properties);
            debug!(
                lab_temperature_c = self.lab_temperature.get::<degree_celsius>(),
                vapor_pressure_mmhg = properties.vapor_pressure.get::<millimeter_of_mercury>(),
                density_g_cm3 = properties.density.get::<gram_per_cubic_centimeter>(),
                surface_tension_dyn_cm = properties.surface_tension.dyne_per_centimeter(),
                viscosity_cp = properties.viscosity.get::<centipoise>(),
                ?handling,
                "derived handling parameters"
            );
            handling
        });

        Liquid {
            lab_temperature: self.lab_temperature,
            properties,
            handling,
        }
    }
}
