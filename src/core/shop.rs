//! Shop draws and the randomness seam behind them

use anyhow::{Context, Result};
use rand::Rng;

use super::units::{Catalog, UnitId};

/// One shop offering: an ordered draw of unit templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    offers: Vec<UnitId>,
}

impl Shop {
    pub fn new(offers: Vec<UnitId>) -> Self {
        Self { offers }
    }

    pub fn size(&self) -> usize {
        self.offers.len()
    }

    pub fn offer(&self, i: usize) -> UnitId {
        self.offers[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.offers.iter().copied()
    }
}

/// Source of shop draws
///
/// Search pulls a fresh shop from this at every non-terminal node; the
/// draw counter backs the node-count accounting.
pub trait ShopSource {
    fn draw(&mut self) -> Result<Shop>;

    /// Number of shops drawn so far
    fn draws(&self) -> u64;
}

/// Shops sampled uniformly (with replacement) from a catalog
pub struct RandomShops<'a, R: Rng> {
    catalog: &'a Catalog,
    shop_size: usize,
    rng: R,
    draws: u64,
}

impl<'a, R: Rng> RandomShops<'a, R> {
    pub fn new(catalog: &'a Catalog, shop_size: usize, rng: R) -> Self {
        Self {
            catalog,
            shop_size,
            rng,
            draws: 0,
        }
    }
}

impl<R: Rng> ShopSource for RandomShops<'_, R> {
    fn draw(&mut self) -> Result<Shop> {
        self.draws += 1;
        Ok(Shop::new(self.catalog.sample(self.shop_size, &mut self.rng)))
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}

/// Replays a fixed sequence of shops; errors once exhausted
///
/// Used by tests to pin exact draws.
pub struct ScriptedShops {
    script: std::collections::VecDeque<Shop>,
    draws: u64,
}

impl ScriptedShops {
    pub fn new(shops: Vec<Shop>) -> Self {
        Self {
            script: shops.into(),
            draws: 0,
        }
    }
}

impl ShopSource for ScriptedShops {
    fn draw(&mut self) -> Result<Shop> {
        self.draws += 1;
        self.script.pop_front().context("shop script exhausted")
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}
