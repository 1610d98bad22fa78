//! Reading from and writing to configuration text.

use uom::si::{
    f64::{Ratio, Time},
    ratio::ratio,
    time::second,
};

use crate::{
    models::boundary::FixedValue,
    support::{dictionary::Dictionary, field::FieldType, mesh::Patch},
};

use super::{DutyCycle, PulseError, PulseFixedValue};

impl<T: FieldType> PulseFixedValue<T> {
    /// Reads a pulse field from configuration text and evaluates it at `time`.
    ///
    /// Entries:
    ///
    /// - `period` (required scalar, simulation time, greater than zero)
    /// - `duration` (required scalar in `[0, 1]`)
    /// - `baseValue` (optional `T`, zero if absent)
    /// - `pulseValue` (required field sized to the patch)
    ///
    /// A `value` entry, if present, is ignored: the initial values always come
    /// from evaluating the pulse.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::Dictionary`] for missing or malformed entries and
    /// [`PulseError::InvalidDuration`] or [`PulseError::InvalidPeriod`] for
    /// out-of-range parameters.
    pub fn from_dictionary(
        patch: Patch,
        field_name: impl Into<String>,
        dict: &Dictionary,
        time: Time,
    ) -> Result<Self, PulseError> {
        let period = dict.get_scalar("period")?;
        let duration = dict.get_scalar("duration")?;
        let base_value = dict.get_value_or("baseValue", T::zero())?;
        let pulse_value = dict.get_field("pulseValue", patch.size())?;

        let duty_cycle = DutyCycle::new(
            Time::new::<second>(period),
            Ratio::new::<ratio>(duration),
        )?;

        let mut pulse = Self {
            field: FixedValue::new(patch, field_name),
            duty_cycle,
            base_value,
            pulse_value,
        };
        pulse.evaluate(time);
        Ok(pulse)
    }

    /// Writes `type`, `period`, `duration`, `baseValue`, `pulseValue`, and
    /// `value`, in that order.
    pub fn write(&self, dict: &mut Dictionary) {
        dict.add_word("type", Self::TYPE_NAME);
        dict.add_scalar("period", self.duty_cycle.period().get::<second>());
        dict.add_scalar("duration", self.duty_cycle.duration().get::<ratio>());
        dict.add_value("baseValue", &self.base_value);
        dict.add_field("pulseValue", &self.pulse_value);
        self.field.write_value(dict);
    }
}
