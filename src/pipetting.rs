//! Applying handling parameters through a robot-control API.
//!
//! The robot itself stays behind the [`Pipette`] trait: motion, plunger
//! control, tips, and labware geometry all belong to the implementation.
//! This module adds the two things that sit between a [`Liquid`] and that
//! API:
//!
//! - [`OverrideTable`]: optimized rates, delays, and touch-tip flags keyed by
//!   pipette model and liquid name, loaded once from CSV.
//! - [`LiquidHandler`]: resolves each parameter as
//!   *explicit argument > table value > computed default* and drives the
//!   pipette through aspirate, dispense, and transfer sequences.
//!
//! [`Liquid`]: crate::models::liquid::Liquid

mod handler;
mod overrides;
mod pipette;

#[cfg(test)]
mod test_support;

pub use handler::{
    AspirateOptions, AspirateSettings, DispenseOptions, DispenseSettings, LiquidHandler, Reagent,
};
pub use overrides::{
    DEFAULT_OVERRIDE_TABLE_FILE, OverrideTable, OverrideTableError, Overrides, RowError,
    pipette_model,
};
pub use pipette::{FlowRates, Pipette, WellPosition};
