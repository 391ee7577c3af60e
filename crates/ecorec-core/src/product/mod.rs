//! Product records and the sustainability score
//!
//! The score is never stored: it is derived from the three attribute flags
//! by [`compute_score`] every time it is read.

mod types;

pub use types::{Attribute, EcoFlags, Flag};

use crate::error::{EcorecError, Result};

/// Highest possible sustainability score
pub const MAX_SCORE: u8 = 3;

/// Count the attributes answered `Yes` (0..=3)
pub fn compute_score(flags: &EcoFlags) -> u8 {
    Attribute::ALL
        .iter()
        .filter(|attr| flags.get(**attr).is_yes())
        .count() as u8
}

/// One catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    flags: EcoFlags,
}

impl Product {
    /// Create a product, rejecting negative or non-finite prices
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        flags: EcoFlags,
    ) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(EcorecError::invalid_value("price", price));
        }
        Ok(Self {
            name: name.into(),
            category: category.into(),
            price,
            flags,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn flags(&self) -> &EcoFlags {
        &self.flags
    }

    /// Replace the attribute flags; the score follows automatically
    pub fn set_flags(&mut self, flags: EcoFlags) {
        self.flags = flags;
    }

    pub fn sustainability_score(&self) -> u8 {
        compute_score(&self.flags)
    }
}
