use uom::si::{
    f64::{Force, Length},
    force::dyne,
    length::centimeter,
};

use super::SurfaceTension;

/// Conversions between [`SurfaceTension`] and dyn/cm.
///
/// Liquid property tables almost always report surface tension in dyn/cm
/// (numerically equal to mN/m), but a custom quantity alias has no unit types
/// of its own to construct from or read back into.
pub trait DynePerCentimeter: Sized {
    /// Creates a surface tension from a value in dyn/cm.
    fn from_dyne_per_centimeter(value: f64) -> Self;

    /// Returns the surface tension in dyn/cm.
    fn dyne_per_centimeter(self) -> f64;
}

impl DynePerCentimeter for SurfaceTension {
    fn from_dyne_per_centimeter(value: f64) -> Self {
        Force::new::<dyne>(value) / Length::new::<centimeter>(1.0)
    }

    fn dyne_per_centimeter(self) -> f64 {
        let force: Force = self * Length::new::<centimeter>(1.0);
        force.get::<dyne>()
    }
}
