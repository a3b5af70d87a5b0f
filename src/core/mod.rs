//! Core game representations and rules

pub mod display;
pub mod game;
pub mod shop;
pub mod units;

pub use game::{GameConfig, GameState, Move, Undo};
pub use shop::{RandomShops, ScriptedShops, Shop, ShopSource};
pub use units::{Catalog, RangeType, UnitId, UnitTemplate, STANDARD_CATALOG};
