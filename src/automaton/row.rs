//! Row initialization and cell access helpers.

use crate::error::AutomatonError;
use crate::state::State;

/// Index of the single seed cell for a row of `width` cells.
#[inline]
pub fn seed_index(width: usize) -> usize {
    width / 2
}

/// Allocate a row of the given width holding the single-seed pattern.
pub fn create_row(width: usize) -> Result<State, AutomatonError> {
    if width == 0 {
        return Err(AutomatonError::ZeroWidth);
    }

    let mut cells = vec![0; width];
    cells[seed_index(width)] = 1;

    Ok(State {
        width,
        cells,
        scratch: vec![0; width],
        generation: 0,
    })
}

/// Clear the row back to the single-seed pattern.
pub fn reset_row(state: &mut State) {
    state.cells.fill(0);
    state.cells[seed_index(state.width)] = 1;
    state.generation = 0;
}

/// Check if an index is within the row.
#[inline]
pub fn in_bounds(state: &State, index: usize) -> bool {
    index < state.width
}

/// Get a cell value, or `None` past the end of the row.
pub fn get_cell(state: &State, index: usize) -> Option<u8> {
    if in_bounds(state, index) {
        Some(state.cells[index])
    } else {
        None
    }
}

/// Neighbourhood of `index` with permanently-off cells beyond both edges.
#[inline]
pub fn neighborhood(cells: &[u8], index: usize) -> (u8, u8, u8) {
    let left = if index > 0 { cells[index - 1] } else { 0 };
    let center = cells[index];
    let right = cells.get(index + 1).copied().unwrap_or(0);
    (left, center, right)
}
