use crate::ai::{SearchContext, Trace};
use crate::core::{Catalog, GameConfig, GameState, Move, RandomShops, ShopSource, STANDARD_CATALOG};
use crate::utils::{make_rng, seeded_rng};

use super::options::EngineOptions;

use anyhow::Result;

/// One scored root move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub score: i32,
}

/// Outcome of a decision run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub choice: String,
    pub score: i32,
    pub candidates: Vec<Candidate>,
    pub nodes: u64,
    pub shops_drawn: u64,
}

/// Engine owns the configuration and root state and drives one decision
pub struct Engine {
    pub config: GameConfig,
    pub state: GameState,
    pub options: EngineOptions,
    pub catalog: Catalog,
}

impl Engine {
    pub fn new(config: GameConfig, options: EngineOptions) -> Self {
        let state = GameState::new(config.starting_gold);
        Self {
            config,
            state,
            options,
            catalog: STANDARD_CATALOG.clone(),
        }
    }

    pub fn reset_game(&mut self) {
        self.state = GameState::new(self.config.starting_gold);
    }

    /// Set an engine option
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    /// Run one root expansion at the given ply depth and pick the best move
    pub fn decide(&self, max_depth: u32) -> Result<Decision> {
        let trace = if self.options.trace {
            Trace::Stdout
        } else {
            Trace::Quiet
        };

        let rng = match self.options.seed {
            Some(seed) => seeded_rng(seed),
            None => make_rng(),
        };
        let shops = RandomShops::new(&self.catalog, self.config.shop_size, rng);

        decide_with(&self.catalog, self.state.clone(), max_depth, shops, trace)
    }
}

/// Root-level expansion over an arbitrary shop source
///
/// Draws one root shop, scores every candidate move (each offer in shop
/// order, then skip) with a minimizing reply ply, and picks the strictly
/// greatest score; on ties the first-seen candidate wins.
pub fn decide_with<S: ShopSource>(
    catalog: &Catalog,
    mut state: GameState,
    max_depth: u32,
    shops: S,
    trace: Trace,
) -> Result<Decision> {
    let mut ctx = SearchContext::new(catalog, shops, trace);

    let shop = ctx.shops.draw()?;
    ctx.trace.root(&shop, catalog);

    let mut candidates = Vec::with_capacity(shop.size() + 1);
    let mut choice = "Skip".to_string();
    let mut best = i32::MIN;

    for mv in Move::all(shop.size()) {
        let label = mv.label(&state, &shop, catalog);

        let undo = state.apply(mv, &shop, catalog);
        let score = ctx.search(&mut state, 1, max_depth, false)?;
        state.revert(undo);

        if score > best {
            best = score;
            choice = label.clone();
        }

        candidates.push(Candidate { label, score });
    }

    Ok(Decision {
        choice,
        score: best,
        candidates,
        nodes: ctx.stats.nodes,
        shops_drawn: ctx.shops.draws(),
    })
}
