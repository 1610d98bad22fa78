//! Minimal view of the host mesh needed by patch fields.

/// A boundary patch: a named set of boundary faces.
///
/// Patch fields only need the face count, which fixes the length of every
/// per-face array they own, and the name, which is used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    name: String,
    size: usize,
}

impl Patch {
    /// Creates a patch with `size` faces.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Returns the patch name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of faces on the patch.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the same patch with a new face count.
    ///
    /// Used after a topology change has resized the patch.
    #[must_use]
    pub fn resized(&self, size: usize) -> Self {
        Self {
            name: self.name.clone(),
            size,
        }
    }
}
