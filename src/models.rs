//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Boundary-condition
//! models for mesh-based field simulations live in [`boundary`].
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The public adapters
//! (the [`twine_core::Model`] implementations and the host-facing traits) are
//! thin wrappers that delegate to that core.

pub mod boundary;
