//! Boundary-condition models.
//!
//! A boundary condition prescribes the values of a field on one boundary
//! patch of a mesh. Every implementation follows the same lifecycle, captured
//! by [`PatchField`]:
//!
//! 1. The host calls `update` once per solve step. The first call computes and
//!    commits the patch values; later calls within the same step do nothing.
//! 2. At the end of the step the host calls `evaluate`, which clears the
//!    "updated" guard so the next step recomputes.
//! 3. When the mesh topology changes, the host calls `auto_map` or `rmap`
//!    before the next update.
//! 4. `write` emits the configuration text the field can be rebuilt from.
//!
//! Implementations are constructed by type name through a
//! [`PatchFieldRegistry`].
//!
//! # Provided boundary conditions
//!
//! - [`FixedValue`] (`fixedValue`): a prescribed per-face value.
//! - [`PulseFixedValue`] (`pulseFixedValue`): a fixed value switched between a
//!   uniform base value and a per-face pulse value by a periodic duty cycle.

mod error;
mod fixed_value;
mod patch_field;
mod pulse;
mod registry;

pub use error::PatchFieldError;
pub use fixed_value::FixedValue;
pub use patch_field::PatchField;
pub use pulse::{
    DutyCycle, Gate, PulseError, PulseFixedValue, ScalarPulseFixedValue, TensorPulseFixedValue,
    VectorPulseFixedValue,
};
pub use registry::{Constructor, PatchFieldRegistry};
