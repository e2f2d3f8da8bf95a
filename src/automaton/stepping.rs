//! Synchronous stepping of the row under a selected rule.

use super::row::neighborhood;
use super::rule::Rule;
use crate::state::State;

/// Step the automaton forward by one generation.
///
/// Every cell reads the previous generation only: next values are written
/// into the scratch buffer, which then becomes the current row. Cells beyond
/// either edge are always off; the row does not wrap.
pub fn step_automaton(state: &mut State, rule: Rule) {
    for i in 0..state.width {
        let (left, center, right) = neighborhood(&state.cells, i);
        state.scratch[i] = rule.apply(left, center, right);
    }

    std::mem::swap(&mut state.cells, &mut state.scratch);
    state.generation += 1;
}
