use crate::model::{Category, MealRecord};
use serde::Deserialize;

/// Body of `categories.php`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<WireCategory>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCategory {
    #[serde(rename = "strCategory", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            name: wire.name.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            thumbnail_url: wire.thumbnail.unwrap_or_default(),
        }
    }
}

/// Body of `search.php`, `filter.php` and `lookup.php`.
///
/// The API answers "nothing matched" with `{"meals": null}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}
