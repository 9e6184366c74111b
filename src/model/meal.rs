use super::record::MealRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Number of numbered ingredient/measure slots on a TheMealDB meal object.
///
/// The API always exposes `strIngredient1..=strIngredient20` and
/// `strMeasure1..=strMeasure20`; unused slots are empty strings or `null`.
pub const INGREDIENT_SLOTS: usize = 20;

/// One line of a meal's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-text amount such as `1 tsp`; empty when the API gives none
    pub measure: String,
    pub ingredient: String,
}

/// Minimal identifying info for a meal card in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl MealSummary {
    /// Summarizes a raw meal object.
    ///
    /// Works for both the short objects returned by category filters and
    /// the full objects returned by name searches. Missing fields become
    /// empty strings.
    pub fn from_record(record: &MealRecord) -> Self {
        MealSummary {
            id: record.id().unwrap_or_default().to_string(),
            name: record.name().unwrap_or_default().to_string(),
            thumbnail_url: record.thumbnail().unwrap_or_default().to_string(),
        }
    }
}

/// A full, normalized recipe ready for display.
///
/// # Examples
///
/// ```
/// # use mealdb_browse::{MealDetail, MealRecord};
/// let record = MealRecord::from_fields([
///     ("idMeal", "1"),
///     ("strMeal", "Toast"),
///     ("strInstructions", "Slice bread.\r\n\r\nToast it.\n"),
///     ("strIngredient1", "Bread"),
///     ("strMeasure1", "2 slices"),
///     ("strSource", "ftp://example.com/toast"),
/// ]);
/// let meal = MealDetail::from_record(&record);
/// assert_eq!(meal.instruction_steps, vec!["Slice bread.", "Toast it."]);
/// assert_eq!(meal.ingredients.len(), 1);
/// assert!(meal.source_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail_url: String,
    /// External recipe link, only kept when it is an `http(s)` URL
    pub source_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instruction_steps: Vec<String>,
}

impl MealDetail {
    /// Normalizes a raw meal object.
    ///
    /// - ingredients are collected from the numbered slots in order,
    ///   skipping slots whose ingredient is missing or blank
    /// - instructions are split on line breaks with blank lines dropped
    /// - the source link is dropped unless it starts with `http`
    pub fn from_record(record: &MealRecord) -> Self {
        MealDetail {
            id: record.id().unwrap_or_default().to_string(),
            name: record.name().unwrap_or_default().to_string(),
            category: record.category().unwrap_or_default().to_string(),
            thumbnail_url: record.thumbnail().unwrap_or_default().to_string(),
            source_url: external_link(record.source()),
            ingredients: collect_ingredients(record),
            instruction_steps: record
                .instructions()
                .map(split_instructions)
                .unwrap_or_default(),
        }
    }
}

/// Collapses the fixed ingredient slots into an ordered list.
fn collect_ingredients(record: &MealRecord) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let (ingredient, measure) = record.ingredient_slot(slot);
            let ingredient = ingredient.map(str::trim).filter(|s| !s.is_empty())?;
            Some(Ingredient {
                measure: measure.map(str::trim).unwrap_or_default().to_string(),
                ingredient: ingredient.to_string(),
            })
        })
        .collect()
}

fn line_break() -> &'static Regex {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK.get_or_init(|| Regex::new(r"\r\n|\r|\n").unwrap())
}

/// Splits free-text instructions into steps, one per non-blank line.
fn split_instructions(text: &str) -> Vec<String> {
    line_break()
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn external_link(source: Option<&str>) -> Option<String> {
    source
        .filter(|url| url.starts_with("http"))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn record(json: &str) -> MealRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_blank_ingredient_slots_are_skipped() {
        let record = MealRecord::from_fields([
            ("strIngredient1", "Salt"),
            ("strMeasure1", "1 tsp"),
            ("strIngredient2", ""),
            ("strMeasure2", "2 cups"),
            ("strIngredient3", "  "),
        ]);

        let meal = MealDetail::from_record(&record);
        assert_eq!(
            meal.ingredients,
            vec![Ingredient {
                measure: "1 tsp".to_string(),
                ingredient: "Salt".to_string(),
            }]
        );
    }

    #[test]
    fn test_ingredients_keep_slot_order_and_null_measures() {
        let record = record(indoc! {r#"
            {
                "strIngredient1": "Flour",
                "strMeasure1": " 200g ",
                "strIngredient2": null,
                "strIngredient3": " Eggs ",
                "strMeasure3": null,
                "strIngredient20": "Butter",
                "strMeasure20": "knob",
                "strIngredient21": "Ignored",
                "strMeasure21": "1"
            }"#});

        let ingredients = collect_ingredients(&record);
        let names: Vec<&str> = ingredients.iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, vec!["Flour", "Eggs", "Butter"]);
        assert_eq!(ingredients[0].measure, "200g");
        assert_eq!(ingredients[1].measure, "");
        assert_eq!(ingredients[2].measure, "knob");
    }

    #[test]
    fn test_split_instructions_drops_blank_lines() {
        assert_eq!(
            split_instructions("Step one.\r\n\r\nStep two.\n"),
            vec!["Step one.", "Step two."]
        );
    }

    #[test]
    fn test_split_instructions_handles_lone_carriage_returns() {
        assert_eq!(
            split_instructions("Mix.\rBake.\n   \nServe.  "),
            vec!["Mix.", "Bake.", "Serve."]
        );
        assert!(split_instructions("\r\n\n  ").is_empty());
    }

    #[test]
    fn test_missing_instructions_yield_no_steps() {
        let record = record(r#"{"idMeal": "1", "strInstructions": null}"#);
        assert!(MealDetail::from_record(&record).instruction_steps.is_empty());
    }

    #[test]
    fn test_source_link_validation() {
        assert_eq!(external_link(Some("ftp://x")), None);
        assert_eq!(external_link(Some("https://x")), Some("https://x".to_string()));
        assert_eq!(external_link(Some("http://x")), Some("http://x".to_string()));
        assert_eq!(external_link(Some("")), None);
        assert_eq!(external_link(Some("javascript:alert(1)")), None);
        assert_eq!(external_link(None), None);
    }

    #[test]
    fn test_full_record_normalization() {
        let record = record(indoc! {r#"
            {
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strInstructions": "Preheat oven to 350.\r\nCombine soy sauce.\r\n",
                "strSource": "https://example.com/teriyaki",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": "water",
                "strMeasure2": "1/2 cup",
                "strIngredient3": "",
                "strMeasure3": ""
            }"#});

        let meal = MealDetail::from_record(&record);
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.category, "Chicken");
        assert_eq!(meal.source_url.as_deref(), Some("https://example.com/teriyaki"));
        assert_eq!(meal.ingredients.len(), 2);
        assert_eq!(meal.instruction_steps.len(), 2);
    }

    #[test]
    fn test_summary_from_filter_record() {
        let record = record(indoc! {r#"
            {
                "strMeal": "Baked salmon with fennel & tomatoes",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
                "idMeal": "52959"
            }"#});

        let summary = MealSummary::from_record(&record);
        assert_eq!(summary.id, "52959");
        assert_eq!(summary.name, "Baked salmon with fennel & tomatoes");
        assert!(summary.thumbnail_url.ends_with("1548772327.jpg"));
    }
}
