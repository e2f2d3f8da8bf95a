//! State creation, destruction, and metadata queries.

use crate::state::State;

/// Creates a new automaton row of `width` cells and returns an opaque pointer.
///
/// The row starts with a single on cell at `width / 2`.
///
/// # Returns
/// A pointer to a new State, or null when `width <= 0`.
///
/// # Safety
/// The returned pointer must eventually be freed with `eca_destroy()`.
#[no_mangle]
pub extern "C" fn eca_create(width: i32) -> *mut State {
    if width <= 0 {
        return std::ptr::null_mut();
    }

    match State::new(width as usize) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees a row created by `eca_create()`, whatever generation it has reached.
///
/// # Safety
/// - `ptr` must come from `eca_create()` and not have been freed yet, or be null
/// - the handle is dangling after this call
#[no_mangle]
pub unsafe extern "C" fn eca_destroy(ptr: *mut State) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}

/// Gets the number of cells in the row.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The width, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn eca_get_width(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).width() as u64
}

/// Number of steps taken since creation or the last `eca_reset()`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// Returns 0 for a null handle, which is indistinguishable from a fresh row.
#[no_mangle]
pub unsafe extern "C" fn eca_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::row::{eca_get_cell, eca_reset, eca_step, ECA_OK};
    use std::ptr;

    #[test]
    fn test_create_seeds_single_cell() {
        unsafe {
            for width in [1, 2, 5, 8] {
                let state = eca_create(width);
                assert!(!state.is_null());
                assert_eq!(eca_get_width(state), width as u64);
                assert_eq!(eca_get_generation(state), 0);

                let on: Vec<u64> = (0..width as u64)
                    .filter(|&i| eca_get_cell(state, i) == 1)
                    .collect();
                assert_eq!(on, vec![(width / 2) as u64]);

                eca_destroy(state);
            }
        }
    }

    #[test]
    fn test_create_rejects_non_positive_width() {
        assert!(eca_create(0).is_null());
        assert!(eca_create(-3).is_null());
        assert!(eca_create(i32::MIN).is_null());
    }

    #[test]
    fn test_generation_tracks_steps_and_reset() {
        unsafe {
            let state = eca_create(9);
            for expected in 1..=4u64 {
                eca_step(state, 0);
                assert_eq!(eca_get_generation(state), expected);
            }
            assert_eq!(eca_get_width(state), 9);

            eca_reset(state);
            assert_eq!(eca_get_generation(state), 0);
            assert_eq!(eca_get_width(state), 9);

            eca_destroy(state);
        }
    }

    #[test]
    fn test_destroy_after_stepping_and_reset() {
        unsafe {
            let stepped = eca_create(16);
            for _ in 0..10 {
                assert_eq!(eca_step(stepped, 1), ECA_OK);
            }
            assert_eq!(eca_get_generation(stepped), 10);
            eca_destroy(stepped);

            let reset = eca_create(3);
            assert_eq!(eca_step(reset, 0), ECA_OK);
            assert_eq!(eca_get_cell(reset, 0), 1);
            assert_eq!(eca_reset(reset), ECA_OK);
            assert_eq!(eca_get_cell(reset, 0), 0);
            eca_destroy(reset);
        }
    }

    #[test]
    fn test_null_handle() {
        unsafe {
            eca_destroy(ptr::null_mut());
            assert_eq!(eca_get_width(ptr::null()), 0);
            assert_eq!(eca_get_generation(ptr::null()), 0);
        }
    }
}
