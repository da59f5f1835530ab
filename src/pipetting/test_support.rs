use std::time::Duration;

use thiserror::Error;

use super::{FlowRates, Pipette, WellPosition};

/// A command received by [`MockPipette`].
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Call {
    MoveTo {
        well: &'static str,
        position: WellPosition,
        speed: Option<f64>,
    },
    Aspirate {
        volume: f64,
        well: &'static str,
        position: WellPosition,
        rate: f64,
    },
    Dispense {
        volume: f64,
        well: &'static str,
        position: WellPosition,
        rate: f64,
    },
    AirGap(f64),
    /// Records the blow-out rate in effect when the blow-out ran.
    BlowOut { rate: f64 },
    TouchTip(&'static str),
    Delay(Duration),
    PickUpTip,
    DropTip,
}

#[derive(Debug, Error)]
#[error("instrument fault")]
pub(super) struct Fault;

/// Records every command and optionally fails blow-outs.
#[derive(Debug)]
pub(super) struct MockPipette {
    pub(super) calls: Vec<Call>,
    pub(super) flow_rates: FlowRates,
    pub(super) fail_blow_out: bool,
}

impl MockPipette {
    /// A P300 with round default rates.
    pub(super) fn p300() -> Self {
        Self {
            calls: Vec::new(),
            flow_rates: FlowRates {
                aspirate: 100.0,
                dispense: 200.0,
                blow_out: 300.0,
                tip_withdrawal: 20.0,
            },
            fail_blow_out: false,
        }
    }
}

impl Pipette for MockPipette {
    type Well = &'static str;
    type Error = Fault;

    fn name(&self) -> &str {
        "p300_single_gen2"
    }

    fn flow_rates(&self) -> FlowRates {
        self.flow_rates
    }

    fn set_blow_out_rate(&mut self, rate: f64) {
        self.flow_rates.blow_out = rate;
    }

    fn move_to(
        &mut self,
        well: &Self::Well,
        position: WellPosition,
        speed: Option<f64>,
    ) -> Result<(), Fault> {
        self.calls.push(Call::MoveTo {
            well: *well,
            position,
            speed,
        });
        Ok(())
    }

    fn aspirate(
        &mut self,
        volume: f64,
        well: &Self::Well,
        position: WellPosition,
        rate: f64,
    ) -> Result<(), Fault> {
        self.calls.push(Call::Aspirate {
            volume,
            well: *well,
            position,
            rate,
        });
        Ok(())
    }

    fn dispense(
        &mut self,
        volume: f64,
        well: &Self::Well,
        position: WellPosition,
        rate: f64,
    ) -> Result<(), Fault> {
        self.calls.push(Call::Dispense {
            volume,
            well: *well,
            position,
            rate,
        });
        Ok(())
    }

    fn air_gap(&mut self, volume: f64) -> Result<(), Fault> {
        self.calls.push(Call::AirGap(volume));
        Ok(())
    }

    fn blow_out(&mut self) -> Result<(), Fault> {
        if self.fail_blow_out {
            return Err(Fault);
        }
        self.calls.push(Call::BlowOut {
            rate: self.flow_rates.blow_out,
        });
        Ok(())
    }

    fn touch_tip(&mut self, well: &Self::Well) -> Result<(), Fault> {
        self.calls.push(Call::TouchTip(*well));
        Ok(())
    }

    fn delay(&mut self, duration: Duration) -> Result<(), Fault> {
        self.calls.push(Call::Delay(duration));
        Ok(())
    }

    fn pick_up_tip(&mut self) -> Result<(), Fault> {
        self.calls.push(Call::PickUpTip);
        Ok(())
    }

    fn drop_tip(&mut self) -> Result<(), Fault> {
        self.calls.push(Call::DropTip);
        Ok(())
    }
}
