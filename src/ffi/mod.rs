//! C ABI for driving a row from a host program.
//!
//! A host creates a row with `eca_create`, steps it with `eca_step` using a
//! numeric rule code, reads it back cell by cell or as rendered text, and
//! frees it with `eca_destroy`. Every call tolerates a null handle.
//! Mutating calls return `ECA_OK` or an error code; queries return 0.

pub mod lifecycle;
pub mod row;

pub use lifecycle::{eca_create, eca_destroy, eca_get_generation, eca_get_width};
pub use row::{
    eca_get_cell, eca_render, eca_reset, eca_step, ECA_NULL_POINTER, ECA_OK, ECA_UNKNOWN_RULE,
};
