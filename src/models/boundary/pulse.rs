//! Pulse fixed-value boundary condition.
//!
//! A fixed-value patch field whose values switch between a uniform base value
//! and a per-face pulse value on a periodic duty cycle.
//! The computational core is in the internal [`core`] module.
//!
//! Both the duty cycle and the blended field are [`twine_core::Model`]s that
//! map simulation time to their output, so they can be evaluated without
//! committing anything to the field.
//!
//! # Example
//!
//! ```
//! use twine_boundary_models::{
//!     models::boundary::{PatchField, ScalarPulseFixedValue},
//!     support::{dictionary::Dictionary, mesh::Patch},
//! };
//! use uom::si::{f64::Time, time::second};
//!
//! let config: Dictionary = "
//!     period      5;
//!     duration    0.5;
//!     baseValue   300;
//!     pulseValue  uniform 350;
//! "
//! .parse()
//! .unwrap();
//!
//! let mut inlet = ScalarPulseFixedValue::from_dictionary(
//!     Patch::new("inlet", 2),
//!     "T",
//!     &config,
//!     Time::new::<second>(0.0),
//! )
//! .unwrap();
//!
//! // 43 s is 60% of the way through a cycle, past the 50% active window.
//! PatchField::update(&mut inlet, Time::new::<second>(43.0));
//! assert_eq!(inlet.values(), &[300.0, 300.0]);
//! ```

pub(crate) mod core;

use std::{any::Any, convert::Infallible};

use nalgebra::{Matrix3, Vector3};
use twine_core::Model;
use uom::si::f64::Time;

use crate::support::{dictionary::Dictionary, field::FieldType, mapping::FaceMap, mesh::Patch};

use super::{PatchField, PatchFieldError};

pub use self::core::{DutyCycle, Gate, PulseError, PulseFixedValue};

/// Pulse boundary condition on a scalar field.
pub type ScalarPulseFixedValue = PulseFixedValue<f64>;

/// Pulse boundary condition on a vector field.
pub type VectorPulseFixedValue = PulseFixedValue<Vector3<f64>>;

/// Pulse boundary condition on a second-rank tensor field.
pub type TensorPulseFixedValue = PulseFixedValue<Matrix3<f64>>;

/// Maps a simulation time to the gate state.
impl Model for DutyCycle {
    type Input = Time;
    type Output = Gate;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.gate(*input))
    }
}

/// Maps a simulation time to the per-face values the field would take.
impl<T: FieldType> Model for PulseFixedValue<T> {
    type Input = Time;
    type Output = Vec<T>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.blended(*input))
    }
}

impl<T: FieldType> PatchField<T> for PulseFixedValue<T> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn patch(&self) -> &Patch {
        PulseFixedValue::patch(self)
    }

    fn values(&self) -> &[T] {
        PulseFixedValue::values(self)
    }

    fn is_updated(&self) -> bool {
        PulseFixedValue::is_updated(self)
    }

    fn update(&mut self, time: Time) {
        PulseFixedValue::update(self, time);
    }

    fn evaluate(&mut self, time: Time) {
        PulseFixedValue::evaluate(self, time);
    }

    fn auto_map(&mut self, mapper: &FaceMap) -> Result<(), PatchFieldError> {
        Ok(PulseFixedValue::auto_map(self, mapper)?)
    }

    fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError> {
        let Some(source) = source.as_any().downcast_ref::<Self>() else {
            return Err(PatchFieldError::TypeMismatch {
                expected: Self::TYPE_NAME,
                found: source.type_name(),
            });
        };
        Ok(PulseFixedValue::rmap(self, source, addressing)?)
    }

    fn write(&self, dict: &mut Dictionary) {
        PulseFixedValue::write(self, dict);
    }

    fn clone_box(&self) -> Box<dyn PatchField<T>> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio, time::second};

    use crate::models::boundary::FixedValue;

    fn at(seconds: f64) -> Time {
        Time::new::<second>(seconds)
    }

    fn pulse(pulse_value: Vec<f64>) -> ScalarPulseFixedValue {
        let duty = DutyCycle::new(at(5.0), Ratio::new::<ratio>(0.5)).unwrap();
        let patch = Patch::new("inlet", pulse_value.len());
        PulseFixedValue::with_pulse(patch, "T", duty, 10.0, pulse_value, at(0.0)).unwrap()
    }

    #[test]
    fn duty_cycle_model() {
        let duty = DutyCycle::new(at(5.0), Ratio::new::<ratio>(0.5)).unwrap();
        assert_eq!(duty.call(&at(42.0)), Ok(Gate::Active));
        assert_eq!(duty.call(&at(43.0)), Ok(Gate::Inactive));
    }

    #[test]
    fn field_model_does_not_commit() {
        let field = pulse(vec![1.0, 2.0]);
        assert_eq!(field.call(&at(43.0)), Ok(vec![10.0, 10.0]));
        assert_eq!(field.values(), &[1.0, 2.0]);
    }

    #[test]
    fn lifecycle_through_trait_object() {
        let mut field: Box<dyn PatchField<f64>> = Box::new(pulse(vec![1.0, 2.0]));
        assert_eq!(field.type_name(), "pulseFixedValue");

        field.update(at(43.0));
        assert_eq!(field.values(), &[10.0, 10.0]);
        field.update(at(42.0));
        assert_eq!(field.values(), &[10.0, 10.0]);

        field.evaluate(at(42.0));
        assert!(!field.is_updated());
        field.update(at(42.0));
        assert_eq!(field.values(), &[1.0, 2.0]);
    }

    #[test]
    fn boxed_clone_is_independent() {
        let original: Box<dyn PatchField<f64>> = Box::new(pulse(vec![1.0, 2.0]));
        let mut copy = original.clone();
        copy.update(at(43.0));
        assert_eq!(copy.values(), &[10.0, 10.0]);
        assert_eq!(original.values(), &[1.0, 2.0]);
    }

    #[test]
    fn rmap_from_same_type() {
        let mut target: Box<dyn PatchField<f64>> = Box::new(pulse(vec![0.0; 3]));
        let source = pulse(vec![5.0]);
        target.rmap(&source, &[1]).unwrap();

        let target = target
            .as_any()
            .downcast_ref::<ScalarPulseFixedValue>()
            .unwrap();
        assert_eq!(target.pulse_value(), &[0.0, 5.0, 0.0]);
    }

    #[test]
    fn rmap_from_other_type_is_rejected() {
        let mut target = pulse(vec![0.0; 3]);
        let before = target.clone();
        let source = FixedValue::uniform(Patch::new("inlet", 1), "T", 4.0);

        let err = PatchField::<f64>::rmap(&mut target, &source, &[0]).unwrap_err();
        assert_eq!(
            err,
            PatchFieldError::TypeMismatch {
                expected: "pulseFixedValue",
                found: "fixedValue",
            }
        );
        assert_eq!(target, before);
    }

    #[test]
    fn mapping_errors_are_wrapped() {
        let mut field: Box<dyn PatchField<f64>> = Box::new(pulse(vec![1.0]));
        assert!(matches!(
            field.auto_map(&FaceMap::Direct(vec![3])),
            Err(PatchFieldError::Mapping(_))
        ));
    }
}
