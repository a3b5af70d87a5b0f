//! Unit templates and the catalog they are drawn from

use anyhow::{ensure, Result};
use lazy_static::lazy_static;
use rand::{Rng, RngExt};

/// Whether a unit fights up close or at range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeType {
    Melee,
    Ranged,
}

/// Immutable description of a purchasable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitTemplate {
    pub name: &'static str,
    pub cost: i32,
    pub base_value: i32,
    pub range_type: RangeType,
}

/// Index of a template within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId(pub usize);

/// Fixed, read-only table of unit templates
///
/// Constructed once and injected wherever units are drawn or looked up;
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<UnitTemplate>,
}

impl Catalog {
    /// Build a catalog from a template table
    ///
    /// Every shop draw samples from this table, so an empty table is
    /// rejected as a configuration error.
    pub fn new(units: Vec<UnitTemplate>) -> Result<Self> {
        ensure!(!units.is_empty(), "catalog must contain at least one unit");
        Ok(Self { units })
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: UnitId) -> &UnitTemplate {
        &self.units[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitTemplate> {
        self.units.iter()
    }

    /// Look up a template by name
    pub fn find(&self, name: &str) -> Option<UnitId> {
        self.units.iter().position(|u| u.name == name).map(UnitId)
    }

    /// Draw `count` templates uniformly at random, with replacement
    pub fn sample(&self, count: usize, rng: &mut impl Rng) -> Vec<UnitId> {
        (0..count)
            .map(|_| UnitId(rng.random_range(0..self.units.len())))
            .collect()
    }
}

lazy_static!(
    /// The standard ten-unit catalog
    pub static ref STANDARD_CATALOG: Catalog = Catalog::new(vec![
        UnitTemplate { name: "Warrior",     cost: 3, base_value: 5, range_type: RangeType::Melee },
        UnitTemplate { name: "Mage",        cost: 3, base_value: 4, range_type: RangeType::Ranged },
        UnitTemplate { name: "Archer",      cost: 2, base_value: 3, range_type: RangeType::Ranged },
        UnitTemplate { name: "Knight",      cost: 4, base_value: 6, range_type: RangeType::Melee },
        UnitTemplate { name: "Assassin",    cost: 3, base_value: 5, range_type: RangeType::Melee },
        UnitTemplate { name: "Paladin",     cost: 5, base_value: 7, range_type: RangeType::Melee },
        UnitTemplate { name: "Sorcerer",    cost: 4, base_value: 6, range_type: RangeType::Ranged },
        UnitTemplate { name: "Ranger",      cost: 3, base_value: 4, range_type: RangeType::Ranged },
        UnitTemplate { name: "Berserker",   cost: 6, base_value: 8, range_type: RangeType::Melee },
        UnitTemplate { name: "Necromancer", cost: 4, base_value: 5, range_type: RangeType::Ranged },
    ]).unwrap();
);
