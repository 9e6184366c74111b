use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A raw meal object exactly as TheMealDB returns it.
///
/// The API sends meals as flat JSON objects with one key per field
/// (`idMeal`, `strMeal`, `strIngredient1`, `strMeasure1`, ...). Any field may
/// be `null`, so this keeps the whole object and exposes typed accessors
/// that treat `null` and non-string values as absent.
///
/// # Examples
///
/// ```
/// # use mealdb_browse::MealRecord;
/// let record = MealRecord::from_fields([
///     ("idMeal", "52772"),
///     ("strMeal", "Teriyaki Chicken Casserole"),
/// ]);
/// assert_eq!(record.id(), Some("52772"));
/// assert_eq!(record.source(), None);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MealRecord {
    #[serde(flatten)]
    pub(super) data: HashMap<String, Value>,
}

impl MealRecord {
    /// Builds a record from string fields.
    ///
    /// Mostly useful for fixtures and in-memory data sources.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let data = fields
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        MealRecord { data }
    }

    /// Returns a field value by API key, including `null` values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns a field as a string.
    ///
    /// Returns `None` if the field is missing, `null` or not a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.text("idMeal")
    }

    pub fn name(&self) -> Option<&str> {
        self.text("strMeal")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("strCategory")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.text("strMealThumb")
    }

    pub fn instructions(&self) -> Option<&str> {
        self.text("strInstructions")
    }

    pub fn source(&self) -> Option<&str> {
        self.text("strSource")
    }

    /// Returns the `(ingredient, measure)` pair stored in a numbered slot.
    ///
    /// Slots are one-indexed, matching the API field names
    /// (`strIngredient1` / `strMeasure1` is slot 1).
    pub fn ingredient_slot(&self, slot: usize) -> (Option<&str>, Option<&str>) {
        (
            self.text(&format!("strIngredient{slot}")),
            self.text(&format!("strMeasure{slot}")),
        )
    }
}
