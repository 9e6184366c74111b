//! Domain types for categories and meals.
//!
//! Raw API objects ([`MealRecord`]) are normalized here into the shapes the
//! views display ([`MealSummary`], [`MealDetail`]).

use serde::{Deserialize, Serialize};

mod meal;
mod record;

pub use meal::{Ingredient, MealDetail, MealSummary, INGREDIENT_SLOTS};
pub use record::MealRecord;

/// A cuisine or meal grouping. Identified by its `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Category {
            name: name.into(),
            description: description.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}
