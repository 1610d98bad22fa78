//! Supporting utilities used by boundary models.
//!
//! These modules stand in for the host framework a boundary condition lives
//! in: the patch it is attached to ([`mesh`]), the face correspondences the
//! mesh engine hands out after a topology change ([`mapping`]), and the
//! configuration text it is read from and written to ([`dictionary`]).
//! [`field`] defines the element types a patch field may hold, and
//! [`constraint`] provides construction-time numeric invariants.

pub mod constraint;
pub mod dictionary;
pub mod field;
pub mod mapping;
pub mod mesh;
