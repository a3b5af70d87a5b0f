//! Game state and purchase rules

use super::{
    shop::Shop,
    units::{Catalog, UnitId},
};

/// Static game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of units offered per shop
    pub shop_size: usize,
    /// Gold available at the root of a decision
    pub starting_gold: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shop_size: 3,
            starting_gold: 10,
        }
    }
}

/// State of a play-out: remaining gold and the owned roster
///
/// The roster is append-only along a single search path; gold never goes
/// negative because a purchase is only applied when affordable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub gold: i32,
    pub roster: Vec<UnitId>,
}

impl GameState {
    pub fn new(gold: i32) -> Self {
        Self {
            gold,
            roster: Vec::new(),
        }
    }

    pub fn can_buy(&self, id: UnitId, catalog: &Catalog) -> bool {
        self.gold >= catalog.get(id).cost
    }

    /// Apply a move in place, returning the record needed to revert it
    ///
    /// A buy of an unaffordable unit applies as a skip; the move is never
    /// rejected. Sibling branches share one state through apply/revert
    /// pairs, so each sees the parent state untouched.
    pub fn apply(&mut self, mv: Move, shop: &Shop, catalog: &Catalog) -> Undo {
        let undo = Undo {
            gold: self.gold,
            roster_len: self.roster.len(),
        };

        if let Move::Buy(i) = mv {
            let id = shop.offer(i);
            if self.can_buy(id, catalog) {
                self.gold -= catalog.get(id).cost;
                self.roster.push(id);
            }
        }

        undo
    }

    pub fn revert(&mut self, undo: Undo) {
        self.gold = undo.gold;
        self.roster.truncate(undo.roster_len);
    }
}

/// A candidate move at a shop: buy the `i`-th offer, or buy nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Buy(usize),
    Skip,
}

impl Move {
    /// All candidate moves for a shop, buys in offer order, skip last
    pub fn all(shop_size: usize) -> impl Iterator<Item = Move> {
        (0..shop_size).map(Move::Buy).chain(std::iter::once(Move::Skip))
    }

    /// Human-readable label; an unaffordable buy plays out as a skip and
    /// is labelled accordingly
    pub fn label(self, state: &GameState, shop: &Shop, catalog: &Catalog) -> String {
        match self {
            Move::Buy(i) if state.can_buy(shop.offer(i), catalog) => {
                format!("Buy {}", catalog.get(shop.offer(i)).name)
            }
            _ => "Skip".to_string(),
        }
    }
}

/// Revert record for one applied move
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    gold: i32,
    roster_len: usize,
}
