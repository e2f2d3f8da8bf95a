//! Core automaton logic and row operations.
//!
//! This module contains the actual logic for seeding the row, stepping it
//! under a rule, and rendering it. The FFI layer in `ffi/` and the `eca`
//! binary call these functions.

pub mod batch;
pub mod render;
pub mod row;
pub mod rule;
pub mod stepping;

pub use batch::{run_batch, run_job, BatchJob, BatchOutcome};
pub use render::{render_into, render_row};
pub use row::{create_row, get_cell, in_bounds, reset_row, seed_index};
pub use rule::Rule;
pub use stepping::step_automaton;
