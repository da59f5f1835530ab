//! Aspirate and dispense sequences parameterized per liquid.

use std::time::Duration;

use tracing::debug;

use crate::models::liquid::Liquid;

use super::{OverrideTable, Overrides, Pipette, WellPosition};

/// A named liquid.
///
/// The name keys the override table; the liquid supplies handling parameters.
#[derive(Debug, Clone, Copy)]
pub struct Reagent<'a> {
    pub name: &'a str,
    pub liquid: &'a Liquid,
}

/// Call-site values for an aspirate. Any value given here wins over the table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AspirateOptions {
    /// Plunger rate, in µL/s.
    pub aspiration_rate: Option<f64>,
    pub aspiration_delay: Option<Duration>,
    /// Tip withdrawal speed, in mm/s.
    pub withdrawal_speed: Option<f64>,
}

/// Call-site values for a dispense. Any value given here wins over the table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DispenseOptions {
    /// Plunger rate, in µL/s.
    pub dispense_rate: Option<f64>,
    pub dispense_delay: Option<Duration>,
    /// Blow-out rate, in µL/s.
    pub blowout_rate: Option<f64>,
    /// Tip withdrawal speed, in mm/s.
    pub withdrawal_speed: Option<f64>,
    pub touch_tip: Option<bool>,
}

/// Resolved aspirate parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspirateSettings {
    pub rate: f64,
    pub delay: Duration,
    pub withdrawal_speed: f64,
}

/// Resolved dispense parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispenseSettings {
    pub rate: f64,
    pub delay: Duration,
    pub blowout_rate: f64,
    pub withdrawal_speed: f64,
    pub touch_tip: bool,
}

/// Drives a [`Pipette`] with per-liquid parameters.
///
/// Every parameter is resolved in the same order: an explicit call-site
/// value, then the override table row for (pipette model, liquid name), then
/// a default computed from the pipette and the liquid's handling parameters.
///
/// | parameter | computed default |
/// |---|---|
/// | aspiration rate | pipette aspirate rate × `aspirate_speed` |
/// | aspiration delay | none |
/// | withdrawal speed | pipette tip-withdrawal speed |
/// | dispense rate | pipette dispense rate × `dispense_speed` |
/// | dispense delay | none |
/// | blow-out rate | pipette blow-out rate when the handler was created |
/// | touch tip | no |
///
/// The table has a single withdrawal column, used after both aspirating and
/// dispensing.
#[derive(Debug)]
pub struct LiquidHandler<P> {
    pipette: P,
    overrides: OverrideTable,
    default_blow_out_rate: f64,
}

impl<P: Pipette> LiquidHandler<P> {
    /// Creates a handler, capturing the pipette's current blow-out rate as its default.
    pub fn new(pipette: P, overrides: OverrideTable) -> Self {
        let default_blow_out_rate = pipette.flow_rates().blow_out;
        Self {
            pipette,
            overrides,
            default_blow_out_rate,
        }
    }

    /// Returns the driven pipette.
    pub fn pipette(&self) -> &P {
        &self.pipette
    }

    /// Returns the pipette for direct commands between handled steps.
    pub fn pipette_mut(&mut self) -> &mut P {
        &mut self.pipette
    }

    /// Consumes the handler, returning the pipette.
    pub fn into_pipette(self) -> P {
        self.pipette
    }

    /// Returns the override table consulted for every operation.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    fn lookup(&self, liquid: &str) -> Option<&Overrides> {
        self.overrides.lookup(self.pipette.name(), liquid)
    }

    /// Resolves aspirate parameters without moving the pipette.
    pub fn aspirate_settings(
        &self,
        reagent: &Reagent<'_>,
        options: &AspirateOptions,
    ) -> AspirateSettings {
        let row = self.lookup(reagent.name);
        let defaults = self.pipette.flow_rates();
        let handling = reagent.liquid.handling();

        AspirateSettings {
            rate: resolve(
                options.aspiration_rate,
                row.map(|row| row.aspiration_rate),
                defaults.aspirate * handling.aspirate_speed,
            ),
            delay: resolve(
                options.aspiration_delay,
                row.map(|row| row.aspiration_delay),
                Duration::ZERO,
            ),
            withdrawal_speed: resolve(
                options.withdrawal_speed,
                row.map(|row| row.withdrawal_speed),
                defaults.tip_withdrawal,
            ),
        }
    }

    /// Resolves dispense parameters without moving the pipette.
    pub fn dispense_settings(
        &self,
        reagent: &Reagent<'_>,
        options: &DispenseOptions,
    ) -> DispenseSettings {
        let row = self.lookup(reagent.name);
        let defaults = self.pipette.flow_rates();
        let handling = reagent.liquid.handling();

        DispenseSettings {
            rate: resolve(
                options.dispense_rate,
                row.map(|row| row.dispense_rate),
                defaults.dispense * handling.dispense_speed,
            ),
            delay: resolve(
                options.dispense_delay,
                row.map(|row| row.dispense_delay),
                Duration::ZERO,
            ),
            blowout_rate: resolve(
                options.blowout_rate,
                row.map(|row| row.blowout_rate),
                self.default_blow_out_rate,
            ),
            withdrawal_speed: resolve(
                options.withdrawal_speed,
                row.map(|row| row.withdrawal_speed),
                defaults.tip_withdrawal,
            ),
            touch_tip: resolve(options.touch_tip, row.map(|row| row.touch_tip), false),
        }
    }

    /// Aspirates `volume` µL of a reagent from `well`.
    ///
    /// The volume is corrected with the liquid's scaling factor and offset.
    /// Liquids that need pre-wetting are drawn up and returned once first.
    /// After withdrawing, the trailing air gap (if any) is drawn.
    ///
    /// # Errors
    ///
    /// Returns the pipette's error if any command fails.
    pub fn aspirate(
        &mut self,
        volume: f64,
        well: &P::Well,
        reagent: &Reagent<'_>,
        options: &AspirateOptions,
    ) -> Result<(), P::Error> {
        let settings = self.aspirate_settings(reagent, options);
        let handling = reagent.liquid.handling();
        let volume = handling.corrected_volume(volume);
        let position = WellPosition::Bottom {
            height: handling.aspirate_height,
        };

        debug!(
            pipette = self.pipette.name(),
            liquid = reagent.name,
            volume,
            ?settings,
            "aspirate"
        );

        self.pipette.move_to(well, WellPosition::Top, None)?;
        if handling.pre_wet {
            self.pipette.aspirate(volume, well, position, settings.rate)?;
            self.pipette.dispense(volume, well, position, settings.rate)?;
        }
        self.pipette.aspirate(volume, well, position, settings.rate)?;
        self.pipette.delay(settings.delay)?;
        self.pipette
            .move_to(well, WellPosition::Top, Some(settings.withdrawal_speed))?;

        if handling.trailing_air_gap > 0.0 {
            self.pipette.air_gap(handling.trailing_air_gap)?;
        }
        Ok(())
    }

    /// Dispenses `volume` µL of a reagent into `well`.
    ///
    /// The stroke covers the corrected volume, the trailing air gap, and the
    /// liquid's extra blowout volume. The blowout volume was never aspirated,
    /// so the stroke exceeds the tip contents by that much; a pipette that
    /// limits the plunger stroke may reject or clamp it. The blow-out rate is
    /// set for the blow-out and restored afterwards, even if the blow-out
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns the pipette's error if any command fails.
    pub fn dispense(
        &mut self,
        volume: f64,
        well: &P::Well,
        reagent: &Reagent<'_>,
        options: &DispenseOptions,
    ) -> Result<(), P::Error> {
        let settings = self.dispense_settings(reagent, options);
        let handling = reagent.liquid.handling();
        let volume =
            handling.corrected_volume(volume) + handling.trailing_air_gap + handling.blowout;
        let position = WellPosition::Bottom {
            height: handling.dispense_height,
        };

        debug!(
            pipette = self.pipette.name(),
            liquid = reagent.name,
            volume,
            ?settings,
            "dispense"
        );

        self.pipette.move_to(well, WellPosition::Top, None)?;
        self.pipette.dispense(volume, well, position, settings.rate)?;
        self.pipette.delay(settings.delay)?;

        let previous = self.pipette.flow_rates().blow_out;
        self.pipette.set_blow_out_rate(settings.blowout_rate);
        let blown_out = self.pipette.blow_out();
        self.pipette.set_blow_out_rate(previous);
        blown_out?;

        if settings.touch_tip {
            self.pipette.touch_tip(well)?;
        }
        self.pipette
            .move_to(well, WellPosition::Top, Some(settings.withdrawal_speed))
    }

    /// Moves `volume` µL of a reagent from `source` to `dest` with a fresh tip.
    ///
    /// Uses table values or computed defaults for every parameter.
    ///
    /// # Errors
    ///
    /// Returns the pipette's error if any command fails.
    pub fn transfer(
        &mut self,
        volume: f64,
        source: &P::Well,
        dest: &P::Well,
        reagent: &Reagent<'_>,
    ) -> Result<(), P::Error> {
        self.pipette.pick_up_tip()?;
        self.aspirate(volume, source, reagent, &AspirateOptions::default())?;
        self.dispense(volume, dest, reagent, &DispenseOptions::default())?;
        self.pipette.drop_tip()
    }
}

fn resolve<T>(explicit: Option<T>, table: Option<T>, computed: T) -> T {
    explicit.or(table).unwrap_or(computed)
}
