//! Elementary Automata - 1D Cellular Automaton Library
//!
//! A finite row of binary cells stepped synchronously under a local rule
//! over each cell and its two neighbours. Cells past either edge are
//! permanently off.
//!
//! The engine is usable directly from Rust through [`State`], and from C
//! through the `eca_*` functions in [`ffi`].

pub mod automaton;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{BatchJob, BatchOutcome, Rule};
pub use error::AutomatonError;
pub use state::State;
