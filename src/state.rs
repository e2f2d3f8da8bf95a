//! Core state structure and helper methods.

use crate::automaton::{self, Rule};
use crate::error::AutomatonError;

/// The internal state of a one-dimensional automaton.
///
/// Both buffers always hold `width` cells. `cells` is the current generation;
/// `scratch` receives the next one and is swapped in after each step.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) width: usize,
    pub(crate) cells: Vec<u8>, // 0 = off, 1 = on
    pub(crate) scratch: Vec<u8>,
    pub(crate) generation: u64,
}

// Scratch contents are leftovers from the previous step and not observable.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.cells == other.cells
            && self.generation == other.generation
    }
}

impl Eq for State {}

impl State {
    /// Create a row of `width` cells holding the single-seed pattern.
    ///
    /// Returns `AutomatonError::ZeroWidth` when `width` is 0.
    pub fn new(width: usize) -> Result<Self, AutomatonError> {
        automaton::create_row(width)
    }

    /// Return to the single-seed pattern and generation 0.
    pub fn reset(&mut self) {
        automaton::reset_row(self);
    }

    /// Advance one generation under `rule`.
    pub fn step(&mut self, rule: Rule) {
        automaton::step_automaton(self, rule);
    }

    /// Render the row as `'*'` (on) and `' '` (off).
    pub fn render(&self) -> String {
        automaton::render_row(self)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation, one byte per cell.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells currently on.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}
