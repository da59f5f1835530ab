//! Linear interpolation between the 20 °C and 25 °C reference temperatures.
//!
//! Liquid property tables commonly list each property at 20 °C and 25 °C.
//! Between (and beyond) those points a property is treated as linear in
//! temperature:
//!
//! ```text
//! v(T) = v₂₀ + (v₂₅ − v₂₀) · (T − 20 °C) / 5 K
//! ```
//!
//! Temperatures outside `[20 °C, 25 °C]` extrapolate along the same line.
//! Nothing is clamped.
//!
//! # Example
//!
//! ```
//! use liquidlib::support::interpolate::interpolate;
//! use uom::si::{
//!     f64::{DynamicViscosity, ThermodynamicTemperature},
//!     dynamic_viscosity::centipoise,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let mu = interpolate(
//!     DynamicViscosity::new::<centipoise>(1.0),
//!     DynamicViscosity::new::<centipoise>(0.9),
//!     ThermodynamicTemperature::new::<degree_celsius>(22.5),
//! );
//! assert!((mu.get::<centipoise>() - 0.95).abs() < 1e-12);
//! ```

use std::ops::{Add, Mul, Sub};

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

/// Lower reference temperature, in °C.
pub const REFERENCE_TEMPERATURE_LOW_C: f64 = 20.0;

/// Upper reference temperature, in °C.
pub const REFERENCE_TEMPERATURE_HIGH_C: f64 = 25.0;

/// Values that can be interpolated linearly.
///
/// Blanket-implemented for anything closed under addition and subtraction and
/// scalable by an `f64`, which covers `f64` itself and every `uom` `f64` quantity.
pub trait Interpolate:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
}

impl<T> Interpolate for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>
{
}

/// Returns the position of `temperature` along the 20 °C → 25 °C span.
///
/// The result is `0.0` at 20 °C, `1.0` at 25 °C, and `0.5` at 22.5 °C.
/// Values below zero or above one indicate extrapolation.
#[must_use]
pub fn interpolation_fraction(temperature: ThermodynamicTemperature) -> f64 {
    let low = ThermodynamicTemperature::new::<degree_celsius>(REFERENCE_TEMPERATURE_LOW_C);
    let span = TemperatureInterval::new::<delta_kelvin>(
        REFERENCE_TEMPERATURE_HIGH_C - REFERENCE_TEMPERATURE_LOW_C,
    );

    (temperature.minus(low) / span).get::<ratio>()
}

/// Interpolates a property measured at 20 °C and 25 °C to `temperature`.
#[must_use]
pub fn interpolate<Q: Interpolate>(
    at_20c: Q,
    at_25c: Q,
    temperature: ThermodynamicTemperature,
) -> Q {
    at_20c + (at_25c - at_20c) * interpolation_fraction(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassDensity, Pressure},
        mass_density::gram_per_cubic_centimeter,
        pressure::millimeter_of_mercury,
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn fraction_spans_reference_temperatures() {
        assert_relative_eq!(interpolation_fraction(celsius(20.0)), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interpolation_fraction(celsius(22.5)), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interpolation_fraction(celsius(25.0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn endpoints_return_reference_values() {
        assert_relative_eq!(interpolate(10.0, 20.0, celsius(20.0)), 10.0, epsilon = 1e-10);
        assert_relative_eq!(interpolate(10.0, 20.0, celsius(25.0)), 20.0, epsilon = 1e-10);
    }

    #[test]
    fn midpoint_is_mean() {
        for (v20, v25) in [(10.0, 20.0), (1000.0, 950.0), (-3.0, 7.5), (0.0, 0.0)] {
            assert_relative_eq!(
                interpolate(v20, v25, celsius(22.5)),
                (v20 + v25) / 2.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn matches_closed_form_inside_and_outside_span() {
        let (v20, v25) = (72.0, 70.0);
        for t in [20.7, 23.1, 24.9] {
            let expected = v20 + (v25 - v20) * (t - 20.0) / 5.0;
            assert_relative_eq!(interpolate(v20, v25, celsius(t)), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn extrapolates_without_clamping() {
        // 30 °C is one full span past 25 °C.
        assert_relative_eq!(interpolate(100.0, 120.0, celsius(30.0)), 140.0, epsilon = 1e-9);
        // 15 °C is one full span before 20 °C.
        assert_relative_eq!(interpolate(100.0, 120.0, celsius(15.0)), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn interpolates_quantities() {
        let rho = interpolate(
            MassDensity::new::<gram_per_cubic_centimeter>(1.0),
            MassDensity::new::<gram_per_cubic_centimeter>(0.98),
            celsius(22.5),
        );
        assert_relative_eq!(rho.get::<gram_per_cubic_centimeter>(), 0.99, epsilon = 1e-12);

        let p = interpolate(
            Pressure::new::<millimeter_of_mercury>(100.0),
            Pressure::new::<millimeter_of_mercury>(120.0),
            celsius(22.5),
        );
        assert_relative_eq!(p.get::<millimeter_of_mercury>(), 110.0, epsilon = 1e-9);
    }
}
