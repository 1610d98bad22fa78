//! Face correspondences used to adapt per-face arrays after a mesh change.
//!
//! When the mesh engine refines, balances, or resizes a patch, it describes
//! how the new faces relate to the old ones with a [`FaceMap`]. Patch fields
//! hand their arrays to the map and receive new arrays of the new length;
//! no array is resized in place.
//!
//! [`reverse_map`] covers the opposite direction: scattering values from a
//! source array into explicitly addressed slots of an existing array, as used
//! when a patch is reassembled from pieces.

use thiserror::Error;

use crate::support::field::FieldType;

/// Errors raised while mapping per-face arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A face refers to a source face that does not exist.
    #[error("face {face} maps from source index {index}, but the source has {len} faces")]
    SourceOutOfRange {
        face: usize,
        index: usize,
        len: usize,
    },

    /// An addressed slot lies outside the target array.
    #[error("source entry {entry} targets face {index}, but the patch has {len} faces")]
    TargetOutOfRange {
        entry: usize,
        index: usize,
        len: usize,
    },

    /// The source array and its addressing have different lengths.
    #[error("addressing has {addressing} entries but the source has {source_len}")]
    AddressingLength { addressing: usize, source_len: usize },
}

/// Describes how each face of a resized patch derives its value.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceMap {
    /// New face `i` copies old face `addressing[i]`.
    Direct(Vec<usize>),

    /// New face `i` is the weighted sum of the listed old faces.
    ///
    /// A face with no weights has no source and receives zero.
    Interpolated(Vec<Vec<(usize, f64)>>),
}

impl FaceMap {
    /// Returns a direct map that leaves `size` faces unchanged.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        Self::Direct((0..size).collect())
    }

    /// Returns the number of faces after mapping.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Direct(addressing) => addressing.len(),
            Self::Interpolated(weights) => weights.len(),
        }
    }

    /// Maps `source` onto the new face indexing.
    ///
    /// The result always has [`FaceMap::size`] entries.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::SourceOutOfRange`] if any face refers to an
    /// index past the end of `source`.
    pub fn map<T: FieldType>(&self, source: &[T]) -> Result<Vec<T>, MappingError> {
        let lookup = |face: usize, index: usize| {
            source
                .get(index)
                .copied()
                .ok_or(MappingError::SourceOutOfRange {
                    face,
                    index,
                    len: source.len(),
                })
        };

        match self {
            Self::Direct(addressing) => addressing
                .iter()
                .enumerate()
                .map(|(face, &index)| lookup(face, index))
                .collect(),
            Self::Interpolated(weights) => weights
                .iter()
                .enumerate()
                .map(|(face, stencil)| {
                    stencil
                        .iter()
                        .try_fold(T::zero(), |acc, &(index, w)| -> Result<T, MappingError> {
                            Ok(acc + lookup(face, index)? * w)
                        })
                })
                .collect(),
        }
    }
}

/// Returns a copy of `target` with `source[i]` written to `addressing[i]`.
///
/// Faces not named in `addressing` keep their existing values.
///
/// # Errors
///
/// Returns an error if `addressing` and `source` differ in length, or if an
/// address lies outside `target`.
pub fn reverse_map<T: FieldType>(
    target: &[T],
    source: &[T],
    addressing: &[usize],
) -> Result<Vec<T>, MappingError> {
    if addressing.len() != source.len() {
        return Err(MappingError::AddressingLength {
            addressing: addressing.len(),
            source_len: source.len(),
        });
    }

    let mut mapped = target.to_vec();
    for (entry, (&index, value)) in addressing.iter().zip(source).enumerate() {
        let slot = mapped
            .get_mut(index)
            .ok_or(MappingError::TargetOutOfRange {
                entry,
                index,
                len: target.len(),
            })?;
        *slot = *value;
    }
    Ok(mapped)
}
