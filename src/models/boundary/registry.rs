//! Construction of patch fields by type name.

use std::collections::BTreeMap;

use uom::si::f64::Time;

use crate::support::{dictionary::Dictionary, field::FieldType, mesh::Patch};

use super::{FixedValue, PatchField, PatchFieldError, PulseFixedValue};

/// Builds a boxed patch field from its configuration entries.
///
/// Arguments are the patch, the name of the field being constrained, the
/// configuration entries, and the current simulation time.
pub type Constructor<T> =
    fn(Patch, &str, &Dictionary, Time) -> Result<Box<dyn PatchField<T>>, PatchFieldError>;

/// Patch field constructors keyed by type name.
///
/// A registry is built once at startup and then only read. The `type` entry
/// of a configuration selects which constructor runs.
///
/// # Example
///
/// ```
/// use twine_boundary_models::{
///     models::boundary::PatchFieldRegistry,
///     support::{dictionary::Dictionary, mesh::Patch},
/// };
/// use uom::si::{f64::Time, time::second};
///
/// let registry = PatchFieldRegistry::<f64>::new();
/// let config: Dictionary = "type fixedValue; value uniform 1;".parse().unwrap();
///
/// let field = registry
///     .construct(Patch::new("wall", 3), "T", &config, Time::new::<second>(0.0))
///     .unwrap();
/// assert_eq!(field.type_name(), "fixedValue");
/// assert_eq!(field.values(), &[1.0; 3]);
/// ```
#[derive(Debug, Clone)]
pub struct PatchFieldRegistry<T> {
    constructors: BTreeMap<&'static str, Constructor<T>>,
}

impl<T: FieldType> PatchFieldRegistry<T> {
    /// Creates a registry with the built-in boundary conditions.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(FixedValue::<T>::TYPE_NAME, fixed_value::<T>);
        registry.register(PulseFixedValue::<T>::TYPE_NAME, pulse_fixed_value::<T>);
        registry
    }

    /// Creates a registry with no constructors.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registers `constructor` under `name`, replacing any previous one.
    pub fn register(&mut self, name: &'static str, constructor: Constructor<T>) {
        self.constructors.insert(name, constructor);
    }

    /// Returns true if a constructor is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Returns the registered type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    /// Builds the patch field named by the `type` entry of `dict`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchFieldError::Dictionary`] if `type` is missing,
    /// [`PatchFieldError::UnknownType`] if no constructor is registered under
    /// it, or whatever error the selected constructor returns.
    pub fn construct(
        &self,
        patch: Patch,
        field_name: &str,
        dict: &Dictionary,
        time: Time,
    ) -> Result<Box<dyn PatchField<T>>, PatchFieldError> {
        let name = dict.get_word("type")?;
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| PatchFieldError::UnknownType {
                    name: name.to_owned(),
                    available: self.names().collect::<Vec<_>>().join(", "),
                })?;
        constructor(patch, field_name, dict, time)
    }
}

impl<T: FieldType> Default for PatchFieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn fixed_value<T: FieldType>(
    patch: Patch,
    field_name: &str,
    dict: &Dictionary,
    _time: Time,
) -> Result<Box<dyn PatchField<T>>, PatchFieldError> {
    let field = FixedValue::<T>::from_dictionary(patch, field_name, dict)?;
    Ok(Box::new(field))
}

fn pulse_fixed_value<T: FieldType>(
    patch: Patch,
    field_name: &str,
    dict: &Dictionary,
    time: Time,
) -> Result<Box<dyn PatchField<T>>, PatchFieldError> {
    let field = PulseFixedValue::<T>::from_dictionary(patch, field_name, dict, time)?;
    Ok(Box::new(field))
}
