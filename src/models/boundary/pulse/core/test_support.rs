use uom::si::{
    f64::{Ratio, Time},
    ratio::ratio,
    time::second,
};

use crate::support::mesh::Patch;

use super::{DutyCycle, PulseFixedValue};

pub(super) fn patch(size: usize) -> Patch {
    Patch::new("inlet", size)
}

pub(super) fn at(seconds: f64) -> Time {
    Time::new::<second>(seconds)
}

pub(super) fn duty(period: f64, duration: f64) -> DutyCycle {
    DutyCycle::new(at(period), Ratio::new::<ratio>(duration))
        .expect("test duty cycle should be valid")
}

/// Builds a scalar pulse field evaluated at time zero.
pub(super) fn scalar_pulse(
    period: f64,
    duration: f64,
    base: f64,
    pulse: Vec<f64>,
) -> PulseFixedValue<f64> {
    PulseFixedValue::with_pulse(
        patch(pulse.len()),
        "T",
        duty(period, duration),
        base,
        pulse,
        at(0.0),
    )
    .expect("test pulse field should be valid")
}
