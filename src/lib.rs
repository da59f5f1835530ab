//! # liquidlib
//!
//! Temperature-aware liquid properties and pipetting parameters for
//! automated liquid handling.
//!
//! A [`Liquid`](models::liquid::Liquid) is described by four physical
//! properties measured at 20 °C and 25 °C. Values at the lab temperature are
//! interpolated from those references, and the pipetting parameters for the
//! liquid are derived from the interpolated values unless given explicitly.
//!
//! ## Crate layout
//!
//! - [`models`]: Liquids and their [`twine_core::Model`] adapters.
//! - [`pipetting`]: Applying handling parameters through a robot-control API.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.
//! Model-specific utility code remains private.

pub mod models;
pub mod pipetting;
pub mod support;
