use std::{any::Any, fmt};

use uom::si::f64::Time;

use crate::support::{dictionary::Dictionary, field::FieldType, mapping::FaceMap, mesh::Patch};

use super::PatchFieldError;

/// The contract every boundary condition on a patch satisfies.
///
/// The host drives implementations through this trait without knowing their
/// concrete type. See the [module documentation](super) for the lifecycle.
pub trait PatchField<T: FieldType>: fmt::Debug {
    /// Returns the registered type name, as written in the `type` entry.
    fn type_name(&self) -> &'static str;

    /// Returns the patch this field is attached to.
    fn patch(&self) -> &Patch;

    /// Returns the current per-face values.
    fn values(&self) -> &[T];

    /// Returns true if `update` has run since the last `evaluate`.
    fn is_updated(&self) -> bool;

    /// Computes and commits the values for the solve step at `time`.
    ///
    /// Does nothing if the field has already been updated this step.
    fn update(&mut self, time: Time);

    /// Updates if needed, then clears the guard for the next step.
    fn evaluate(&mut self, time: Time);

    /// Adapts all per-face arrays to a new face indexing.
    ///
    /// # Errors
    ///
    /// Returns an error if the map refers to faces that do not exist.
    fn auto_map(&mut self, mapper: &FaceMap) -> Result<(), PatchFieldError>;

    /// Copies `source` values into the faces listed in `addressing`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchFieldError::TypeMismatch`] if `source` is a different
    /// kind of patch field, or a mapping error for bad addressing.
    fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError>;

    /// Writes the entries this field can be reconstructed from.
    fn write(&self, dict: &mut Dictionary);

    /// Returns a boxed copy of this field.
    fn clone_box(&self) -> Box<dyn PatchField<T>>;

    /// Returns `self` as [`Any`] so `rmap` can recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T: FieldType> Clone for Box<dyn PatchField<T>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
