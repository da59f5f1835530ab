//! Heuristic rules that turn liquid properties into handling parameters.
//!
//! Two dimensionless measures drive most of the rules:
//!
//! - **Viscosity excess**, `e = max(μ / μ_ref − 1, 0)`: how much thicker the
//!   liquid is than water. Liquids at or below the reference viscosity have `e = 0`.
//! - **Volatility**, `v = p / (p + p½)` with `p = max(vapor pressure, 0)`:
//!   saturates toward one as vapor pressure grows past the half-saturation
//!   pressure `p½`.
//!
//! From those, with `HandlingRules::default()`:
//!
//! | parameter | rule |
//! |---|---|
//! | `pre_wet` | `σ ≥ 70 dyn/cm` |
//! | `aspirate_speed` | `max(0.3, 1 / (1 + 0.1·e))` |
//! | `dispense_speed` | `max(0.3, 1 / (1 + 0.2·e))` |
//! | `aspirate_height` | `min(2.0, 0.2·e)` mm |
//! | `dispense_height` | `min(1.0, 0.1·e)` mm |
//! | `trailing_air_gap` | `5·v` µL |
//! | `blowout` | `10·v` µL |
//! | `scaling_factor` | `1 + 0.5·(ρ / ρ_ref − 1)`, limited to `[0.8, 1.2]` |
//! | `offset` | `0.1 + 0.05·e + 0.5·v` µL |
//!
//! Dispense is throttled harder than aspirate because viscous liquids string
//! and drip on the way out of the tip.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    dynamic_viscosity::centipoise,
    f64::{DynamicViscosity, MassDensity, Pressure},
    mass_density::gram_per_cubic_centimeter,
    pressure::millimeter_of_mercury,
    ratio::ratio,
};

use crate::support::units::{DynePerCentimeter, SurfaceTension};

use super::{HandlingParameters, PhysicalProperties};

/// Coefficients for deriving [`HandlingParameters`] from [`PhysicalProperties`].
///
/// The defaults are tuned for aqueous liquids handled with air-displacement
/// pipettes. Every derived parameter is monotonic in the property that drives
/// it, and stays inside the documented range for viscosities up to 10 cP.
///
/// The reference quantities (`reference_viscosity`, `reference_density`, and
/// `vapor_pressure_half_saturation`) must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlingRules {
    /// Surface tension at or above which tips are pre-wetted.
    pub pre_wet_surface_tension: SurfaceTension,

    /// Viscosity treated as "no slower than water".
    pub reference_viscosity: DynamicViscosity,

    /// Density at which no volume scaling is applied.
    pub reference_density: MassDensity,

    /// Vapor pressure at which volatility reaches one half.
    pub vapor_pressure_half_saturation: Pressure,

    /// Aspirate slowdown per unit of viscosity excess.
    pub aspirate_slowdown: f64,

    /// Dispense slowdown per unit of viscosity excess.
    pub dispense_slowdown: f64,

    /// Lower bound for both speed multipliers.
    pub min_speed: f64,

    /// Aspirate height gained per unit of viscosity excess, in mm.
    pub aspirate_height_gain: f64,

    /// Upper bound for the aspirate height, in mm.
    pub max_aspirate_height: f64,

    /// Dispense height gained per unit of viscosity excess, in mm.
    pub dispense_height_gain: f64,

    /// Upper bound for the dispense height, in mm.
    pub max_dispense_height: f64,

    /// Trailing air gap approached as volatility goes to one, in µL.
    pub max_trailing_air_gap: f64,

    /// Blowout volume approached as volatility goes to one, in µL.
    pub max_blowout: f64,

    /// Change in scaling factor per unit of relative density deviation.
    pub density_sensitivity: f64,

    /// Lower bound for the scaling factor.
    pub min_scaling_factor: f64,

    /// Upper bound for the scaling factor.
    pub max_scaling_factor: f64,

    /// Offset applied to every derived liquid, in µL.
    pub base_offset: f64,

    /// Offset added per unit of viscosity excess, in µL.
    pub viscous_offset: f64,

    /// Offset added at full volatility, in µL.
    pub volatile_offset: f64,
}

impl Default for HandlingRules {
    fn default() -> Self {
        Self {
            pre_wet_surface_tension: SurfaceTension::from_dyne_per_centimeter(70.0),
            reference_viscosity: DynamicViscosity::new::<centipoise>(1.0),
            reference_density: MassDensity::new::<gram_per_cubic_centimeter>(0.997),
            vapor_pressure_half_saturation: Pressure::new::<millimeter_of_mercury>(400.0),
            aspirate_slowdown: 0.1,
            dispense_slowdown: 0.2,
            min_speed: 0.3,
            aspirate_height_gain: 0.2,
            max_aspirate_height: 2.0,
            dispense_height_gain: 0.1,
            max_dispense_height: 1.0,
            max_trailing_air_gap: 5.0,
            max_blowout: 10.0,
            density_sensitivity: 0.5,
            min_scaling_factor: 0.8,
            max_scaling_factor: 1.2,
            base_offset: 0.1,
            viscous_offset: 0.05,
            volatile_offset: 0.5,
        }
    }
}

impl HandlingRules {
    /// Derives handling parameters for a liquid with the given properties.
    #[must_use]
    pub fn derive(&self, properties: &PhysicalProperties) -> HandlingParameters {
        let excess = self.viscosity_excess(properties.viscosity);
        let volatility = self.volatility(properties.vapor_pressure);

        HandlingParameters {
            trailing_air_gap: self.max_trailing_air_gap * volatility,
            blowout: self.max_blowout * volatility,
            pre_wet: properties.surface_tension >= self.pre_wet_surface_tension,
            aspirate_speed: (1.0 / (1.0 + self.aspirate_slowdown * excess)).max(self.min_speed),
            dispense_speed: (1.0 / (1.0 + self.dispense_slowdown * excess)).max(self.min_speed),
            aspirate_height: (self.aspirate_height_gain * excess).min(self.max_aspirate_height),
            dispense_height: (self.dispense_height_gain * excess).min(self.max_dispense_height),
            scaling_factor: self.scaling_factor(properties.density),
            offset: self.base_offset
                + self.viscous_offset * excess
                + self.volatile_offset * volatility,
        }
    }

    fn viscosity_excess(&self, viscosity: DynamicViscosity) -> f64 {
        ((viscosity / self.reference_viscosity).get::<ratio>() - 1.0).max(0.0)
    }

    fn volatility(&self, vapor_pressure: Pressure) -> f64 {
        let p = vapor_pressure.value.max(0.0);
        p / (p + self.vapor_pressure_half_saturation.value)
    }

    fn scaling_factor(&self, density: MassDensity) -> f64 {
        let deviation = (density / self.reference_density).get::<ratio>() - 1.0;
        (1.0 + self.density_sensitivity * deviation)
            .max(self.min_scaling_factor)
            .min(self.max_scaling_factor)
    }
}

/// Exposes derivation as a [`Model`] from properties to handling parameters.
impl Model for HandlingRules {
    type Input = PhysicalProperties;
    type Output = HandlingParameters;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.derive(input))
    }
}
