//! The prescribed-value patch field that other boundary conditions build on.

use std::any::Any;

use uom::si::f64::Time;

use crate::support::{
    dictionary::{Dictionary, DictionaryError},
    field::FieldType,
    mapping::{FaceMap, MappingError, reverse_map},
    mesh::Patch,
};

use super::{PatchField, PatchFieldError};

/// A patch field whose values are prescribed rather than solved for.
///
/// On its own this is the `fixedValue` boundary condition: the values are
/// read from the `value` entry and stay constant. Other boundary conditions
/// hold a `FixedValue` and [`assign`](FixedValue::assign) new values to it on
/// each update, reusing its update guard, mapping, and `value` output.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedValue<T> {
    patch: Patch,
    field_name: String,
    values: Vec<T>,
    updated: bool,
}

impl<T: FieldType> FixedValue<T> {
    /// Type name used for registration and in the `type` entry.
    pub const TYPE_NAME: &'static str = "fixedValue";

    /// Creates a zero-valued field on `patch`.
    pub fn new(patch: Patch, field_name: impl Into<String>) -> Self {
        Self::uniform(patch, field_name, T::zero())
    }

    /// Creates a field with the same value on every face.
    pub fn uniform(patch: Patch, field_name: impl Into<String>, value: T) -> Self {
        let values = vec![value; patch.size()];
        Self {
            patch,
            field_name: field_name.into(),
            values,
            updated: false,
        }
    }

    /// Reads the required `value` entry, sized to the patch.
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if `value` is missing, malformed, or has
    /// the wrong number of faces.
    pub fn from_dictionary(
        patch: Patch,
        field_name: impl Into<String>,
        dict: &Dictionary,
    ) -> Result<Self, DictionaryError> {
        let values = dict.get_field("value", patch.size())?;
        Ok(Self {
            patch,
            field_name: field_name.into(),
            values,
            updated: false,
        })
    }

    /// Returns a copy attached to a different field.
    #[must_use]
    pub fn with_field_name(&self, field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy adapted to the face indexing described by `mapper`.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the map refers to missing faces.
    pub fn mapped(&self, mapper: &FaceMap) -> Result<Self, MappingError> {
        let mut mapped = self.clone();
        mapped.auto_map(mapper)?;
        Ok(mapped)
    }

    /// Returns the patch this field is attached to.
    #[must_use]
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    /// Returns the name of the field this patch field belongs to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Returns the current per-face values.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns true if the field has been updated this step.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Replaces the per-face values.
    ///
    /// The caller keeps `values` the same length as the patch.
    pub fn assign(&mut self, values: Vec<T>) {
        debug_assert_eq!(
            values.len(),
            self.patch.size(),
            "assigned values must match the face count of patch '{}'",
            self.patch.name()
        );
        self.values = values;
    }

    /// Commits the current values for this step.
    pub fn update(&mut self) {
        self.updated = true;
    }

    /// Commits if needed, then clears the guard for the next step.
    pub fn evaluate(&mut self) {
        if !self.updated {
            self.update();
        }
        self.updated = false;
    }

    /// Maps the values onto a new face indexing and resizes the patch.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the map refers to missing faces, in which
    /// case the field is left unchanged.
    pub fn auto_map(&mut self, mapper: &FaceMap) -> Result<(), MappingError> {
        self.values = mapper.map(&self.values)?;
        self.patch = self.patch.resized(mapper.size());
        self.updated = false;
        Ok(())
    }

    /// Writes `source[i]` into face `addressing[i]`.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] for mismatched or out-of-range addressing,
    /// in which case the field is left unchanged.
    pub fn rmap(&mut self, source: &[T], addressing: &[usize]) -> Result<(), MappingError> {
        self.values = reverse_map(&self.values, source, addressing)?;
        self.updated = false;
        Ok(())
    }

    /// Writes the `value` entry.
    pub fn write_value(&self, dict: &mut Dictionary) {
        dict.add_field("value", &self.values);
    }
}

impl<T: FieldType> PatchField<T> for FixedValue<T> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn patch(&self) -> &Patch {
        FixedValue::patch(self)
    }

    fn values(&self) -> &[T] {
        FixedValue::values(self)
    }

    fn is_updated(&self) -> bool {
        FixedValue::is_updated(self)
    }

    fn update(&mut self, _time: Time) {
        FixedValue::update(self);
    }

    fn evaluate(&mut self, _time: Time) {
        FixedValue::evaluate(self);
    }

    fn auto_map(&mut self, mapper: &FaceMap) -> Result<(), PatchFieldError> {
        Ok(FixedValue::auto_map(self, mapper)?)
    }

    fn rmap(
        &mut self,
        source: &dyn PatchField<T>,
        addressing: &[usize],
    ) -> Result<(), PatchFieldError> {
        Ok(FixedValue::rmap(self, source.values(), addressing)?)
    }

    fn write(&self, dict: &mut Dictionary) {
        dict.add_word("type", Self::TYPE_NAME);
        self.write_value(dict);
    }

    fn clone_box(&self) -> Box<dyn PatchField<T>> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
