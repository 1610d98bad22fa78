//! Duty-cycle driven fixed-value boundary condition.
//!
//! The patch value switches between a uniform base value and a per-face pulse
//! value. On every solve step the duty cycle yields a gate `g ∈ {0, 1}` and
//! each face receives `base*(1 - g) + pulse[i]*g`.
//!
//! The pulse array is tied one-to-one to the patch faces. It changes only
//! through the mesh-change operations, which map it with the same face map
//! as the field values so the two never disagree in length.

mod duty_cycle;
mod error;
mod persist;

#[cfg(test)]
mod test_support;

pub use duty_cycle::{DutyCycle, Gate};
pub use error::PulseError;

use uom::si::f64::Time;

use crate::{
    models::boundary::FixedValue,
    support::{
        field::{FieldType, blend},
        mapping::{FaceMap, MappingError, reverse_map},
        mesh::Patch,
    },
};

/// A fixed-value patch field gated by a periodic duty cycle.
///
/// Holds a [`FixedValue`] for the committed values and the update guard, and
/// layers the pulse logic on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseFixedValue<T> {
    field: FixedValue<T>,
    duty_cycle: DutyCycle,
    base_value: T,
    pulse_value: Vec<T>,
}

impl<T: FieldType> PulseFixedValue<T> {
    /// Type name used for registration and in the `type` entry.
    pub const TYPE_NAME: &'static str = "pulseFixedValue";

    /// Creates an unconfigured pulse field.
    ///
    /// The duty cycle is inert, the base value is zero, and the pulse array is
    /// zero-filled to the patch size.
    pub fn new(patch: Patch, field_name: impl Into<String>) -> Self {
        let pulse_value = vec![T::zero(); patch.size()];
        Self {
            field: FixedValue::new(patch, field_name),
            duty_cycle: DutyCycle::inert(),
            base_value: T::zero(),
            pulse_value,
        }
    }

    /// Creates a configured pulse field and evaluates it at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::PulseSize`] if `pulse_value` does not have one
    /// entry per patch face.
    pub fn with_pulse(
        patch: Patch,
        field_name: impl Into<String>,
        duty_cycle: DutyCycle,
        base_value: T,
        pulse_value: Vec<T>,
        time: Time,
    ) -> Result<Self, PulseError> {
        if pulse_value.len() != patch.size() {
            return Err(PulseError::PulseSize {
                expected: patch.size(),
                found: pulse_value.len(),
            });
        }

        let mut pulse = Self {
            field: FixedValue::new(patch, field_name),
            duty_cycle,
            base_value,
            pulse_value,
        };
        pulse.evaluate(time);
        Ok(pulse)
    }

    /// Returns a copy attached to a different field, with nothing remapped.
    #[must_use]
    pub fn with_field_name(&self, field_name: impl Into<String>) -> Self {
        Self {
            field: self.field.with_field_name(field_name),
            ..self.clone()
        }
    }

    /// Returns a copy adapted to the face indexing described by `mapper`.
    ///
    /// Parameters are copied as-is; the pulse array and the current values
    /// are mapped.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the map refers to missing faces.
    pub fn mapped(&self, mapper: &FaceMap) -> Result<Self, MappingError> {
        Ok(Self {
            field: self.field.mapped(mapper)?,
            duty_cycle: self.duty_cycle,
            base_value: self.base_value,
            pulse_value: mapper.map(&self.pulse_value)?,
        })
    }

    /// Returns the duty cycle.
    #[must_use]
    pub fn duty_cycle(&self) -> &DutyCycle {
        &self.duty_cycle
    }

    /// Returns the uniform base value.
    #[must_use]
    pub fn base_value(&self) -> &T {
        &self.base_value
    }

    /// Returns the per-face pulse values.
    #[must_use]
    pub fn pulse_value(&self) -> &[T] {
        &self.pulse_value
    }

    /// Returns the underlying fixed-value field.
    #[must_use]
    pub fn field(&self) -> &FixedValue<T> {
        &self.field
    }

    /// Returns the patch this field is attached to.
    #[must_use]
    pub fn patch(&self) -> &Patch {
        self.field.patch()
    }

    /// Returns the committed per-face values.
    #[must_use]
    pub fn values(&self) -> &[T] {
        self.field.values()
    }

    /// Returns true if the field has been updated this step.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.field.is_updated()
    }

    /// Returns the values the field would take at `time`, without committing.
    #[must_use]
    pub fn blended(&self, time: Time) -> Vec<T> {
        let weight = self.duty_cycle.gate(time).weight();
        self.pulse_value
            .iter()
            .map(|&pulse| blend(self.base_value, pulse, weight))
            .collect()
    }

    /// Computes and commits the values for the solve step at `time`.
    ///
    /// Does nothing if the field was already updated this step.
    pub fn update(&mut self, time: Time) {
        if self.field.is_updated() {
            return;
        }
        let values = self.blended(time);
        self.field.assign(values);
        self.field.update();
    }

    /// Updates if needed, then clears the guard for the next step.
    pub fn evaluate(&mut self, time: Time) {
        self.update(time);
        self.field.evaluate();
    }

    /// Maps the pulse array and the values onto a new face indexing.
    ///
    /// The field is left fresh; values are not recomputed until the next
    /// update.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the map refers to missing faces, in which
    /// case the field is left unchanged.
    pub fn auto_map(&mut self, mapper: &FaceMap) -> Result<(), MappingError> {
        let pulse_value = mapper.map(&self.pulse_value)?;
        self.field.auto_map(mapper)?;
        self.pulse_value = pulse_value;
        Ok(())
    }

    /// Copies `source` pulse entries and values into the addressed faces.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] for mismatched or out-of-range addressing,
    /// in which case the field is left unchanged.
    pub fn rmap(&mut self, source: &Self, addressing: &[usize]) -> Result<(), MappingError> {
        let pulse_value = reverse_map(&self.pulse_value, &source.pulse_value, addressing)?;
        self.field.rmap(source.values(), addressing)?;
        self.pulse_value = pulse_value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::Vector3;
    use proptest::prelude::*;

    use super::test_support::{at, duty, patch, scalar_pulse};

    #[test]
    fn default_is_zero_and_inert() {
        let pulse = PulseFixedValue::<Vector3<f64>>::new(patch(4), "U");
        assert_eq!(pulse.pulse_value(), &[Vector3::zeros(); 4]);
        assert_eq!(*pulse.base_value(), Vector3::zeros());
        assert_eq!(pulse.duty_cycle(), &DutyCycle::inert());
        assert_eq!(pulse.values().len(), 4);
    }

    #[test]
    fn active_gate_writes_pulse_value() {
        let mut pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0, 3.0]);
        pulse.update(at(42.0));
        assert_eq!(pulse.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn inactive_gate_writes_base_value() {
        let mut pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0, 3.0]);
        pulse.update(at(43.0));
        assert_eq!(pulse.values(), &[10.0; 3]);
    }

    #[test]
    fn construction_evaluates_once_and_leaves_field_fresh() {
        let pulse = PulseFixedValue::with_pulse(
            patch(2),
            "T",
            duty(5.0, 0.5),
            0.0,
            vec![4.0, 5.0],
            at(1.0),
        )
        .unwrap();
        assert_eq!(pulse.values(), &[4.0, 5.0]);
        assert!(!pulse.is_updated());
    }

    #[test]
    fn pulse_must_match_patch_size() {
        assert_eq!(
            PulseFixedValue::with_pulse(patch(3), "T", duty(1.0, 0.5), 0.0, vec![1.0], at(0.0)),
            Err(PulseError::PulseSize {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn second_update_in_a_step_is_ignored() {
        let mut pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0, 3.0]);
        pulse.update(at(42.0));
        let first = pulse.values().to_vec();

        // Same step, different clock reading: the guard wins.
        pulse.update(at(43.0));
        assert_eq!(pulse.values(), first.as_slice());
        assert!(pulse.is_updated());

        // Next step recomputes.
        pulse.evaluate(at(43.0));
        pulse.update(at(43.0));
        assert_eq!(pulse.values(), &[10.0; 3]);
    }

    #[test]
    fn vector_blending() {
        let mut pulse = PulseFixedValue::with_pulse(
            patch(2),
            "U",
            duty(2.0, 0.25),
            Vector3::new(0.0, 0.0, 1.0),
            vec![Vector3::x(), Vector3::y()],
            at(0.0),
        )
        .unwrap();
        assert_eq!(pulse.values(), &[Vector3::x(), Vector3::y()]);

        pulse.update(at(1.0));
        assert_eq!(pulse.values(), &[Vector3::z(); 2]);
    }

    #[test]
    fn auto_map_keeps_pulse_in_step_with_patch() {
        let mut pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0, 3.0]);
        pulse.update(at(42.0));

        pulse.auto_map(&FaceMap::Direct(vec![2, 2, 0, 1, 0])).unwrap();
        assert_eq!(pulse.pulse_value(), &[3.0, 3.0, 1.0, 2.0, 1.0]);
        assert_eq!(pulse.patch().size(), 5);
        assert_eq!(pulse.values().len(), 5);
        assert!(!pulse.is_updated());

        pulse.update(at(42.0));
        assert_eq!(pulse.values(), &[3.0, 3.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn failed_auto_map_leaves_field_unchanged() {
        let mut pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0]);
        let before = pulse.clone();
        assert!(pulse.auto_map(&FaceMap::Direct(vec![0, 7])).is_err());
        assert_eq!(pulse, before);
    }

    #[test]
    fn rmap_copies_addressed_pulse_entries() {
        let mut target = scalar_pulse(5.0, 0.5, 0.0, vec![0.0; 4]);
        let source = scalar_pulse(5.0, 0.5, 0.0, vec![7.0, 9.0]);

        target.rmap(&source, &[3, 0]).unwrap();
        assert_eq!(target.pulse_value(), &[9.0, 0.0, 0.0, 7.0]);
        assert_eq!(target.pulse_value().len(), target.patch().size());

        assert!(target.rmap(&source, &[4, 0]).is_err());
    }

    #[test]
    fn mapped_copy_keeps_parameters() {
        let pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0]);
        let mapped = pulse.mapped(&FaceMap::Direct(vec![1])).unwrap();
        assert_eq!(mapped.duty_cycle(), pulse.duty_cycle());
        assert_eq!(mapped.base_value(), pulse.base_value());
        assert_eq!(mapped.pulse_value(), &[2.0]);
        assert_eq!(mapped.patch().size(), 1);
    }

    #[test]
    fn field_name_copy_is_verbatim() {
        let pulse = scalar_pulse(5.0, 0.5, 10.0, vec![1.0, 2.0]);
        let copy = pulse.with_field_name("p");
        assert_eq!(copy.field().field_name(), "p");
        assert_eq!(copy.pulse_value(), pulse.pulse_value());
        assert_eq!(copy.values(), pulse.values());
    }

    proptest! {
        #[test]
        fn remapped_pulse_matches_patch_size(
            addressing in proptest::collection::vec(0_usize..6, 0..20),
        ) {
            let mut pulse = scalar_pulse(1.0, 0.5, 0.0, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
            pulse.auto_map(&FaceMap::Direct(addressing.clone())).unwrap();
            prop_assert_eq!(pulse.pulse_value().len(), addressing.len());
            prop_assert_eq!(pulse.patch().size(), addressing.len());
            prop_assert_eq!(pulse.values().len(), addressing.len());
        }
    }
}
