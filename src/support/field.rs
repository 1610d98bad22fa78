//! Element types that can be stored in a boundary patch field.
//!
//! A patch field holds one value per boundary face. The value may be a
//! scalar (`f64`), a vector ([`Vector3<f64>`]), or a second-rank tensor
//! ([`Matrix3<f64>`]). [`FieldType`] is the common contract: the arithmetic
//! needed to blend values, and a flat component view used to read and write
//! configuration text.
//!
//! Tensor components are laid out row-major (`xx xy xz yx ... zz`).

use std::{
    fmt::Debug,
    ops::{Add, Mul},
};

use nalgebra::{Matrix3, Vector3};
use num_traits::Zero;

/// A value type that can be stored per face in a patch field.
pub trait FieldType:
    Copy + Debug + PartialEq + Zero + Add<Output = Self> + Mul<f64, Output = Self> + 'static
{
    /// Name of the type in configuration text (e.g. `List<vector>`).
    const TYPE_NAME: &'static str;

    /// Number of scalar components.
    const COMPONENTS: usize;

    /// Returns the components in their canonical order.
    fn components(&self) -> Vec<f64>;

    /// Builds a value from components, or `None` if the count is wrong.
    fn from_components(components: &[f64]) -> Option<Self>;
}

impl FieldType for f64 {
    const TYPE_NAME: &'static str = "scalar";
    const COMPONENTS: usize = 1;

    fn components(&self) -> Vec<f64> {
        vec![*self]
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x] => Some(*x),
            _ => None,
        }
    }
}

impl FieldType for Vector3<f64> {
    const TYPE_NAME: &'static str = "vector";
    const COMPONENTS: usize = 3;

    fn components(&self) -> Vec<f64> {
        self.iter().copied().collect()
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y, z] => Some(Vector3::new(*x, *y, *z)),
            _ => None,
        }
    }
}

impl FieldType for Matrix3<f64> {
    const TYPE_NAME: &'static str = "tensor";
    const COMPONENTS: usize = 9;

    fn components(&self) -> Vec<f64> {
        self.transpose().iter().copied().collect()
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        (components.len() == Self::COMPONENTS).then(|| Matrix3::from_row_slice(components))
    }
}

/// Blends two values with a weight in `[0, 1]`: `a*(1 - w) + b*w`.
pub fn blend<T: FieldType>(a: T, b: T, weight: f64) -> T {
    a * (1.0 - weight) + b * weight
}
