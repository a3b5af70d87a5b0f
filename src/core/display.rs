use std::fmt;

use colored::Colorize;

use super::{
    shop::Shop,
    units::{Catalog, RangeType, UnitTemplate},
};

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeType::Melee => write!(f, "{}", "Melee".bright_red()),
            RangeType::Ranged => write!(f, "{}", "Ranged".bright_blue()),
        }
    }
}

impl fmt::Display for UnitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} V{} {}]",
            self.name.bold(),
            format!("${}", self.cost).bright_yellow(),
            self.base_value,
            self.range_type
        )
    }
}

impl Shop {
    /// Displayable view of the shop, offers in draw order
    pub fn display<'a>(&'a self, catalog: &'a Catalog) -> ShopDisplay<'a> {
        ShopDisplay {
            shop: self,
            catalog,
        }
    }
}

pub struct ShopDisplay<'a> {
    shop: &'a Shop,
    catalog: &'a Catalog,
}

impl fmt::Display for ShopDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.shop.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.catalog.get(id))?;
        }
        Ok(())
    }
}
