//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical properties of a liquid (vapor
//! pressure, density, viscosity, temperature). This module fills the gaps
//! that matter for liquid handling.
//!
//! ## Surface tension
//!
//! [`SurfaceTension`] is a quantity alias with [`DynePerCentimeter`]
//! conversions, since property tables report it in dyn/cm:
//!
//! ```
//! use liquidlib::support::units::{DynePerCentimeter, SurfaceTension};
//!
//! let sigma = SurfaceTension::from_dyne_per_centimeter(72.0);
//! assert!((sigma.dyne_per_centimeter() - 72.0).abs() < 1e-12);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method for subtracting one absolute
//! temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use liquidlib::support::units::TemperatureDifference;
//!
//! let lab = ThermodynamicTemperature::new::<degree_celsius>(22.5);
//! let reference = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let delta_t = lab.minus(reference);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod surface_tension;
mod temperature_difference;

pub use quantities::SurfaceTension;
pub use surface_tension::DynePerCentimeter;
pub use temperature_difference::TemperatureDifference;
