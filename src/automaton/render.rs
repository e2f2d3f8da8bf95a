//! Text view of the current row.

use crate::state::State;

pub const ON_CHAR: u8 = b'*';
pub const OFF_CHAR: u8 = b' ';

#[inline]
fn cell_char(cell: u8) -> u8 {
    if cell == 1 {
        ON_CHAR
    } else {
        OFF_CHAR
    }
}

/// Render the row, one character per cell.
pub fn render_row(state: &State) -> String {
    state.cells.iter().map(|&c| cell_char(c) as char).collect()
}

/// Write the rendered row into `out_buf`.
///
/// Writes `min(width, out_buf.len())` bytes and returns that count.
pub fn render_into(state: &State, out_buf: &mut [u8]) -> usize {
    let written = state.cells.len().min(out_buf.len());
    for (dst, &cell) in out_buf.iter_mut().zip(&state.cells) {
        *dst = cell_char(cell);
    }
    written
}
