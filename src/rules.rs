//! Shop rule tables.
//!
//! Delivery surcharges and bread-unit counting are keyed on category names and
//! product-name keywords. Both live here as data so the engines stay free of
//! scattered string matching and tests can swap in their own tables.

use crate::catalog::{
    CLASSIC_DONER, DRINKS_AND_SNACKS, HATAY_DONER, MENUS, PORTIONS, TACOS,
};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Per-unit delivery surcharge by category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SurchargeRule {
    pub category: String,
    pub per_unit: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeliveryRules {
    pub surcharges: Vec<SurchargeRule>,
    /// Items whose name contains any of these never carry a surcharge.
    pub exempt_name_keywords: Vec<String>,
}

impl DeliveryRules {
    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt_name_keywords
            .iter()
            .any(|keyword| contains_ignore_case(name, keyword))
    }

    /// Surcharge for one unit of `category`; unknown categories pay nothing.
    pub fn per_unit(&self, category: &str) -> f64 {
        self.surcharges
            .iter()
            .find(|rule| rule.category == category)
            .map(|rule| rule.per_unit)
            .unwrap_or(0.0)
    }
}

impl Default for DeliveryRules {
    fn default() -> Self {
        let meal = |category: &str| SurchargeRule {
            category: category.to_string(),
            per_unit: 20.0,
        };

        DeliveryRules {
            surcharges: vec![
                meal(HATAY_DONER),
                meal(CLASSIC_DONER),
                meal(TACOS),
                meal(PORTIONS),
                meal(MENUS),
                SurchargeRule {
                    category: DRINKS_AND_SNACKS.to_string(),
                    per_unit: 10.0,
                },
            ],
            exempt_name_keywords: vec!["lavaş".to_string()],
        }
    }
}

/// How many flatbreads a product name implies per unit sold.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BreadRules {
    pub excluded_categories: Vec<String>,
    pub excluded_name_keywords: Vec<String>,
    pub double_name_keywords: Vec<String>,
}

impl BreadRules {
    /// The category check and the name check overlap for tacos; both are kept
    /// so a taco filed under another category is still skipped.
    pub fn is_excluded(&self, name: &str, category: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == category)
            || self
                .excluded_name_keywords
                .iter()
                .any(|keyword| contains_ignore_case(name, keyword))
    }

    /// Bread units per unit sold, 0 for excluded products.
    pub fn units_per_item(&self, name: &str, category: &str) -> u64 {
        if self.is_excluded(name, category) {
            return 0;
        }
        if self
            .double_name_keywords
            .iter()
            .any(|keyword| contains_ignore_case(name, keyword))
        {
            2
        } else {
            1
        }
    }
}

impl Default for BreadRules {
    fn default() -> Self {
        BreadRules {
            excluded_categories: vec![DRINKS_AND_SNACKS.to_string(), TACOS.to_string()],
            excluded_name_keywords: vec!["tako".to_string()],
            double_name_keywords: vec!["maksi".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ShopRules {
    pub delivery: DeliveryRules,
    pub bread: BreadRules,
}
