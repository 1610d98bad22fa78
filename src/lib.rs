//! # Twine Boundary Models
//!
//! Boundary-condition models for mesh-based field simulations, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The headline model is the pulse fixed-value boundary condition, which
//! switches a patch between a uniform base value and a per-face pulse value
//! on a periodic duty cycle.
//!
//! ## Crate layout
//!
//! - [`models`]: Boundary conditions and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models, including the minimal
//!   host interfaces (patches, face maps, configuration text) a boundary
//!   condition is driven through.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain, it moves to a
//!    domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific and domain-specific utility code remains private.

pub mod models;
pub mod support;
