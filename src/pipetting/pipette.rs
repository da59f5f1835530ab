use std::time::Duration;

/// Default flow rates of a pipette.
///
/// Plunger rates are in µL/s; `tip_withdrawal` is in mm/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRates {
    pub aspirate: f64,
    pub dispense: f64,
    pub blow_out: f64,
    pub tip_withdrawal: f64,
}

/// Where in a well the tip is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WellPosition {
    /// The top of the well.
    Top,

    /// `height` mm above the well bottom.
    Bottom { height: f64 },
}

/// The robot-control API used to carry out liquid handling.
///
/// Implementations translate each call into the corresponding instrument
/// command. Volumes are in µL, plunger rates in µL/s, and speeds in mm/s.
pub trait Pipette {
    /// Labware location the pipette can move to.
    type Well;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the instrument name, such as `p300_single_gen2`.
    fn name(&self) -> &str;

    /// Returns the current default flow rates.
    fn flow_rates(&self) -> FlowRates;

    /// Sets the flow rate used by [`blow_out`](Self::blow_out).
    fn set_blow_out_rate(&mut self, rate: f64);

    /// Moves the tip to `position` in `well`, at `speed` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the move.
    fn move_to(
        &mut self,
        well: &Self::Well,
        position: WellPosition,
        speed: Option<f64>,
    ) -> Result<(), Self::Error>;

    /// Draws `volume` into the tip at `position` in `well`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the aspirate.
    fn aspirate(
        &mut self,
        volume: f64,
        well: &Self::Well,
        position: WellPosition,
        rate: f64,
    ) -> Result<(), Self::Error>;

    /// Pushes `volume` out of the tip at `position` in `well`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the dispense.
    fn dispense(
        &mut self,
        volume: f64,
        well: &Self::Well,
        position: WellPosition,
        rate: f64,
    ) -> Result<(), Self::Error>;

    /// Draws `volume` of air into the tip at its current location.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the air gap.
    fn air_gap(&mut self, volume: f64) -> Result<(), Self::Error>;

    /// Expels the remaining contents of the tip at its current location.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the blow-out.
    fn blow_out(&mut self) -> Result<(), Self::Error>;

    /// Touches the tip to the sides of `well`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument rejects the touch.
    fn touch_tip(&mut self, well: &Self::Well) -> Result<(), Self::Error>;

    /// Pauses the protocol.
    ///
    /// # Errors
    ///
    /// Returns an error if the protocol cannot pause.
    fn delay(&mut self, duration: Duration) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if no tip can be picked up.
    fn pick_up_tip(&mut self) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the tip cannot be dropped.
    fn drop_tip(&mut self) -> Result<(), Self::Error>;
}
