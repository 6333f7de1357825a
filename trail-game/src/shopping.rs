//! One-time supply allocation made before the wagon leaves.
//!
//! Amounts are kept exactly as the player typed them (after input filtering).
//! [`ShoppingAllocation::parse_amounts`] and [`SpendAmounts::check`] provide an
//! opt-in typed view for callers that want the budget rules enforced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BudgetPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    Animals,
    Food,
    Ammunition,
    Clothing,
    Misc,
}

impl ShoppingCategory {
    /// Categories in the order the store asks about them.
    pub const ALL: [Self; 5] = [
        Self::Animals,
        Self::Food,
        Self::Ammunition,
        Self::Clothing,
        Self::Misc,
    ];
}

impl std::fmt::Display for ShoppingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Animals => write!(f, "oxen team"),
            Self::Food => write!(f, "food"),
            Self::Ammunition => write!(f, "ammunition"),
            Self::Clothing => write!(f, "clothing"),
            Self::Misc => write!(f, "miscellaneous items"),
        }
    }
}

/// Rejections produced by the typed shopping check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShoppingError {
    #[error("amount for {category} must be a whole number of dollars, 0 or more (got {value:?})")]
    InvalidAmount {
        category: ShoppingCategory,
        value: String,
    },
    #[error("spent ${spent} but only ${available} is left after buying the wagon")]
    BudgetExceeded { spent: i64, available: i64 },
    #[error("oxen team must cost between ${min} and ${max} (got ${spent})")]
    OxenOutOfRange { spent: i64, min: i64, max: i64 },
}

/// The five spend amounts as captured from the console. Every amount is `"0"`
/// before the store is visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingAllocation {
    pub animals: String,
    pub food: String,
    pub ammunition: String,
    pub clothing: String,
    pub misc: String,
}

impl Default for ShoppingAllocation {
    fn default() -> Self {
        Self::new(0, 0, 0, 0, 0)
    }
}

impl ShoppingAllocation {
    #[must_use]
    pub fn new(
        animals: impl ToString,
        food: impl ToString,
        ammunition: impl ToString,
        clothing: impl ToString,
        misc: impl ToString,
    ) -> Self {
        Self {
            animals: animals.to_string(),
            food: food.to_string(),
            ammunition: ammunition.to_string(),
            clothing: clothing.to_string(),
            misc: misc.to_string(),
        }
    }

    #[must_use]
    pub fn amount(&self, category: ShoppingCategory) -> &str {
        match category {
            ShoppingCategory::Animals => &self.animals,
            ShoppingCategory::Food => &self.food,
            ShoppingCategory::Ammunition => &self.ammunition,
            ShoppingCategory::Clothing => &self.clothing,
            ShoppingCategory::Misc => &self.misc,
        }
    }

    /// Mutable slot for a category, used when filling the allocation prompt by prompt.
    pub fn amount_mut(&mut self, category: ShoppingCategory) -> &mut String {
        match category {
            ShoppingCategory::Animals => &mut self.animals,
            ShoppingCategory::Food => &mut self.food,
            ShoppingCategory::Ammunition => &mut self.ammunition,
            ShoppingCategory::Clothing => &mut self.clothing,
            ShoppingCategory::Misc => &mut self.misc,
        }
    }

    /// Parse every amount as a non-negative whole number.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingError::InvalidAmount`] for the first category that is
    /// empty, non-numeric, or negative.
    pub fn parse_amounts(&self) -> Result<SpendAmounts, ShoppingError> {
        let parse = |category: ShoppingCategory| -> Result<i64, ShoppingError> {
            let raw = self.amount(category);
            raw.trim()
                .parse::<i64>()
                .ok()
                .filter(|value| *value >= 0)
                .ok_or_else(|| ShoppingError::InvalidAmount {
                    category,
                    value: raw.to_string(),
                })
        };
        Ok(SpendAmounts {
            animals: parse(ShoppingCategory::Animals)?,
            food: parse(ShoppingCategory::Food)?,
            ammunition: parse(ShoppingCategory::Ammunition)?,
            clothing: parse(ShoppingCategory::Clothing)?,
            misc: parse(ShoppingCategory::Misc)?,
        })
    }
}

/// Parsed dollar amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendAmounts {
    pub animals: i64,
    pub food: i64,
    pub ammunition: i64,
    pub clothing: i64,
    pub misc: i64,
}

impl SpendAmounts {
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.animals
            .saturating_add(self.food)
            .saturating_add(self.ammunition)
            .saturating_add(self.clothing)
            .saturating_add(self.misc)
    }

    /// Apply the oxen price band and the overall budget.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingError::OxenOutOfRange`] or
    /// [`ShoppingError::BudgetExceeded`].
    pub fn check(&self, policy: &BudgetPolicy) -> Result<(), ShoppingError> {
        if !(policy.oxen_min..=policy.oxen_max).contains(&self.animals) {
            return Err(ShoppingError::OxenOutOfRange {
                spent: self.animals,
                min: policy.oxen_min,
                max: policy.oxen_max,
            });
        }
        let spent = self.total();
        let available = policy.available();
        if spent > available {
            return Err(ShoppingError::BudgetExceeded { spent, available });
        }
        Ok(())
    }
}
