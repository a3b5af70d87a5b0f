//! Depth-limited minimax over purchase decisions

use anyhow::Result;

use crate::ai::eval::evaluate;
use crate::core::{Catalog, GameState, Move, Shop, ShopSource};

/// Counters accumulated over one search invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes visited, terminal nodes included
    pub nodes: u64,
}

/// Where per-node trace lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Quiet,
    Stdout,
}

impl Trace {
    /// Announce the root shop of a decision
    pub fn root(&self, shop: &Shop, catalog: &Catalog) {
        if let Trace::Stdout = self {
            println!("Root shop: {}", shop.display(catalog));
        }
    }

    fn node(&self, depth: u32, shop: &Shop, catalog: &Catalog) {
        if let Trace::Stdout = self {
            let indent = "  ".repeat(depth as usize);
            println!(
                "{}Shop at depth {}: {}",
                indent,
                depth,
                shop.display(catalog)
            );
        }
    }
}

/// Everything a search needs besides the state: the catalog, the shop
/// stream, trace routing and counters
pub struct SearchContext<'a, S: ShopSource> {
    pub catalog: &'a Catalog,
    pub shops: S,
    pub trace: Trace,
    pub stats: SearchStats,
}

impl<'a, S: ShopSource> SearchContext<'a, S> {
    pub fn new(catalog: &'a Catalog, shops: S, trace: Trace) -> Self {
        Self {
            catalog,
            shops,
            trace,
            stats: SearchStats::default(),
        }
    }

    /// Score a state by depth-first recursion
    ///
    /// At `depth >= max_depth` the state is evaluated directly. Otherwise
    /// a fresh shop is drawn for this node and every candidate move (each
    /// offer, then skip) is applied, recursed into with the roles swapped,
    /// and reverted. Unaffordable buys play out as skips, so the branching
    /// factor is always `shop_size + 1`. Maximizing nodes keep the largest
    /// child score, minimizing nodes the smallest; on ties the first-seen
    /// child wins.
    pub fn search(
        &mut self,
        state: &mut GameState,
        depth: u32,
        max_depth: u32,
        maximizing: bool,
    ) -> Result<i32> {
        self.stats.nodes += 1;

        // >= rather than == so that a zero-ply decision, whose reply calls
        // start at depth 1, still terminates
        if depth >= max_depth {
            return Ok(evaluate(self.catalog, state));
        }

        let shop = self.shops.draw()?;
        self.trace.node(depth, &shop, self.catalog);

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in Move::all(shop.size()) {
            let undo = state.apply(mv, &shop, self.catalog);
            let score = self.search(state, depth + 1, max_depth, !maximizing)?;
            state.revert(undo);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        Ok(best)
    }
}
