use uom::{
    ConstZero,
    si::{
        f64::{Ratio, Time},
        ratio::ratio,
        time::second,
    },
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval};

use super::PulseError;

/// Whether the pulse is active at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The pulse value applies.
    Active,
    /// The base value applies.
    Inactive,
}

impl Gate {
    /// Returns the blending weight of the pulse value: `1.0` or `0.0`.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::Active => 1.0,
            Self::Inactive => 0.0,
        }
    }
}

/// A periodic on/off schedule.
///
/// The pulse is active during the first `duration` fraction of every cycle
/// of length `period`, boundary included. A configured duty cycle always has a
/// positive period; only [`DutyCycle::inert`] has a zero period, and it is
/// never active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyCycle {
    period: Constrained<Time, NonNegative>,
    duration: Constrained<Ratio, UnitInterval>,
}

impl DutyCycle {
    /// Creates a duty cycle from a period and an active fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidPeriod`] if `period` is not greater than
    /// zero, and [`PulseError::InvalidDuration`] if `duration` lies outside
    /// `[0, 1]`.
    pub fn new(period: Time, duration: Ratio) -> Result<Self, PulseError> {
        let period = StrictlyPositive::new(period).map_err(|source| PulseError::InvalidPeriod {
            value: period.get::<second>(),
            source,
        })?;
        let duration =
            UnitInterval::new(duration).map_err(|source| PulseError::InvalidDuration {
                value: duration.get::<ratio>(),
                source,
            })?;
        Ok(Self::from_constrained(period, duration))
    }

    /// Creates a duty cycle from pre-validated parts.
    #[must_use]
    pub fn from_constrained(
        period: Constrained<Time, StrictlyPositive>,
        duration: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        Self {
            period: period.into(),
            duration,
        }
    }

    /// Returns an inert duty cycle with zero period and zero duration.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            period: NonNegative::zero(),
            duration: UnitInterval::zero(),
        }
    }

    /// Returns the cycle length.
    #[must_use]
    pub fn period(&self) -> Time {
        *self.period.as_ref()
    }

    /// Returns the active fraction of each cycle.
    #[must_use]
    pub fn duration(&self) -> Ratio {
        *self.duration.as_ref()
    }

    /// Returns how far `time` is into its cycle, in `[0, 1)` for `time ≥ 0`.
    ///
    /// Returns `None` for an inert duty cycle.
    #[must_use]
    pub fn cycle_fraction(&self, time: Time) -> Option<Ratio> {
        let period = self.period();
        if period == Time::ZERO {
            return None;
        }
        let cycles: Ratio = time / period;
        Some(Ratio::new::<ratio>(cycles.get::<ratio>() % 1.0))
    }

    /// Returns the gate at `time`.
    ///
    /// The comparison is `cycle_fraction > duration → inactive`, so a fraction
    /// exactly equal to the duration is still active.
    #[must_use]
    pub fn gate(&self, time: Time) -> Gate {
        match self.cycle_fraction(time) {
            Some(fraction) if fraction > self.duration() => Gate::Inactive,
            Some(_) => Gate::Active,
            None => Gate::Inactive,
        }
    }
}

impl Default for DutyCycle {
    fn default() -> Self {
        Self::inert()
    }
}
