//! Roster evaluation

use crate::core::{Catalog, GameState, RangeType};

/// Weight of the melee/ranged imbalance penalty
const BALANCE_PENALTY: i32 = 2;

/// Score a state: remaining gold plus roster value, minus a synergy
/// penalty for an uneven melee/ranged split
///
/// Pure and deterministic; this is the terminal evaluation of the search.
pub fn evaluate(catalog: &Catalog, state: &GameState) -> i32 {
    let mut score = state.gold;

    let mut melee: i32 = 0;
    let mut ranged: i32 = 0;

    for &id in &state.roster {
        let unit = catalog.get(id);
        score += unit.base_value;
        match unit.range_type {
            RangeType::Melee => melee += 1,
            RangeType::Ranged => ranged += 1,
        }
    }

    score - BALANCE_PENALTY * (melee - ranged).abs()
}
