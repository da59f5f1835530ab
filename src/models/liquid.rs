//! Liquid property and handling-parameter models.
//!
//! The computation lives in the internal `core` module. Its public types are
//! re-exported here, and [`LiquidModel`] adapts it to [`twine_core::Model`]
//! with the lab temperature as the model input.

mod core;

pub use self::core::{
    DEFAULT_LAB_TEMPERATURE_C, HandlingParameters, HandlingRules, Liquid, LiquidBuilder,
    Measurements, PhysicalProperties, PropertyPair, ReferenceProperties, default_lab_temperature,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// A liquid as a function of lab temperature.
///
/// Calling the model evaluates the liquid's reference properties at the given
/// temperature and derives (or reuses) its handling parameters, exactly as
/// [`Liquid::builder`] would.
///
/// # Example
///
/// ```
/// use liquidlib::models::liquid::{LiquidModel, Measurements};
/// use twine_core::Model;
/// use uom::si::{
///     dynamic_viscosity::centipoise,
///     f64::ThermodynamicTemperature,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let measurements: Measurements = serde_json::from_str(r#"{
///     "vapor_pressure_20c": 17.5, "vapor_pressure_25c": 23.8,
///     "density_20c": 0.998, "density_25c": 0.997,
///     "surface_tension_20c": 72.8, "surface_tension_25c": 72.0,
///     "viscosity_20c": 1.002, "viscosity_25c": 0.890
/// }"#).unwrap();
///
/// let model = LiquidModel::new(measurements.reference());
/// let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);
/// let liquid = model.call(&t).unwrap();
/// assert!((liquid.viscosity().get::<centipoise>() - 0.890).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidModel {
    reference: ReferenceProperties,
    handling: Option<HandlingParameters>,
    rules: HandlingRules,
}

impl LiquidModel {
    /// Creates a model that derives handling with the default rules.
    #[must_use]
    pub fn new(reference: ReferenceProperties) -> Self {
        Self {
            reference,
            handling: None,
            rules: HandlingRules::default(),
        }
    }

    /// Uses fixed handling parameters at every temperature.
    #[must_use]
    pub fn with_handling(mut self, handling: HandlingParameters) -> Self {
        self.handling = Some(handling);
        self
    }

    /// Derives handling with custom rules.
    #[must_use]
    pub fn with_rules(mut self, rules: HandlingRules) -> Self {
        self.rules = rules;
        self
    }
}

impl Model for LiquidModel {
    type Input = ThermodynamicTemperature;
    type Output = Liquid;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let builder = Liquid::builder(self.reference)
            .lab_temperature(*input)
            .rules(self.rules);

        Ok(match self.handling {
            Some(handling) => builder.handling(handling).build(),
            None => builder.build(),
        })
    }
}
