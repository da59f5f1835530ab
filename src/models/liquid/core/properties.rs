use uom::si::f64::{DynamicViscosity, MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::{
    interpolate::{Interpolate, interpolate},
    units::SurfaceTension,
};

/// A property measured at the 20 °C and 25 °C reference temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyPair<Q> {
    pub at_20c: Q,
    pub at_25c: Q,
}

impl<Q: Interpolate> PropertyPair<Q> {
    #[must_use]
    pub fn new(at_20c: Q, at_25c: Q) -> Self {
        Self { at_20c, at_25c }
    }

    /// Returns the property linearly interpolated (or extrapolated) to `temperature`.
    #[must_use]
    pub fn at(&self, temperature: ThermodynamicTemperature) -> Q {
        interpolate(self.at_20c, self.at_25c, temperature)
    }
}

/// Reference measurements of the four properties that drive liquid handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceProperties {
    pub vapor_pressure: PropertyPair<Pressure>,
    pub density: PropertyPair<MassDensity>,
    pub surface_tension: PropertyPair<SurfaceTension>,
    pub viscosity: PropertyPair<DynamicViscosity>,
}

impl ReferenceProperties {
    /// Evaluates every property at `temperature`.
    #[must_use]
    pub fn at(&self, temperature: ThermodynamicTemperature) -> PhysicalProperties {
        PhysicalProperties {
            vapor_pressure: self.vapor_pressure.at(temperature),
            density: self.density.at(temperature),
            surface_tension: self.surface_tension.at(temperature),
            viscosity: self.viscosity.at(temperature),
        }
    }
}

/// Liquid properties at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProperties {
    pub vapor_pressure: Pressure,
    pub density: MassDensity,
    pub surface_tension: SurfaceTension,
    pub viscosity: DynamicViscosity,
}
