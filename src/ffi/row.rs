//! Reset, stepping, cell access and rendering.

use crate::automaton::{self, Rule};
use crate::state::State;

/// Status codes returned by the mutating calls.
pub const ECA_OK: i32 = 0;
pub const ECA_NULL_POINTER: i32 = 1;
pub const ECA_UNKNOWN_RULE: i32 = 2;

/// Returns the row to its single-seed pattern and generation 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer)
#[no_mangle]
pub unsafe extern "C" fn eca_reset(ptr: *mut State) -> i32 {
    if ptr.is_null() {
        return ECA_NULL_POINTER;
    }

    (*ptr).reset();
    ECA_OK
}

/// Advances the automaton by one generation.
///
/// `rule` selects the transition: 0 = three-cell parity, 1 = center+right
/// parity.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on an unknown rule code. The row is
/// left untouched on failure.
#[no_mangle]
pub unsafe extern "C" fn eca_step(ptr: *mut State, rule: u8) -> i32 {
    if ptr.is_null() {
        return ECA_NULL_POINTER;
    }

    let rule = match Rule::from_code(rule) {
        Ok(rule) => rule,
        Err(_) => return ECA_UNKNOWN_RULE,
    };

    automaton::step_automaton(&mut *ptr, rule);
    ECA_OK
}

/// Gets the state of a cell (0 = off, 1 = on).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or off; 1 if on.
#[no_mangle]
pub unsafe extern "C" fn eca_get_cell(ptr: *const State, index: u64) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    usize::try_from(index)
        .ok()
        .and_then(|i| automaton::get_cell(&*ptr, i))
        .unwrap_or(0)
}

/// Renders the row into `out_buf` as `'*'` (on) and `' '` (off) bytes.
///
/// No terminator is written.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written (at most the row width), or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn eca_render(ptr: *const State, out_buf: *mut u8, len: u64) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    // A length that does not fit in usize is necessarily longer than the row
    let len = usize::try_from(len).map_or(state.width(), |len| len.min(state.width()));

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::render_into(state, buf_slice) as u64
}
