//! In-memory data source for pipeline and browser tests.

use crate::model::{Category, MealRecord, MealSummary};
use crate::source::{RecipeDataSource, SourceError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub(crate) fn category(name: &str, description: &str) -> Category {
    Category::new(name, description, format!("https://example.com/{name}.png"))
}

pub(crate) fn meal_summary(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://example.com/{id}.jpg"),
    }
}

/// Canned responses keyed by request, with an optional gate per request
/// so tests can decide the order in which responses resolve.
///
/// Request keys: `categories`, `search:{query}`, `filter:{category}`,
/// `lookup:{id}`.
#[derive(Default)]
pub(crate) struct MockSource {
    categories: Mutex<Vec<Category>>,
    searches: HashMap<String, Vec<MealSummary>>,
    filters: HashMap<String, Option<Vec<MealSummary>>>,
    meals: HashMap<String, MealRecord>,
    failing: bool,
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_categories(self, categories: Vec<Category>) -> Self {
        self.set_categories(categories);
        self
    }

    pub(crate) fn set_categories(&self, categories: Vec<Category>) {
        *self.categories.lock().unwrap() = categories;
    }

    pub(crate) fn with_search(mut self, query: &str, meals: Vec<MealSummary>) -> Self {
        self.searches.insert(query.to_string(), meals);
        self
    }

    pub(crate) fn with_category(mut self, name: &str, meals: Option<Vec<MealSummary>>) -> Self {
        self.filters.insert(name.to_string(), meals);
        self
    }

    pub(crate) fn with_meal(mut self, record: MealRecord) -> Self {
        let id = record.id().unwrap_or_default().to_string();
        self.meals.insert(id, record);
        self
    }

    /// Every request fails with an HTTP 503.
    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Holds the response to `key` until the returned sender fires.
    pub(crate) fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    pub(crate) fn call_count(&self, key: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == key).count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn respond(&self, key: String) -> Result<(), SourceError> {
        self.calls.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.failing {
            return Err(SourceError::Status {
                endpoint: key,
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeDataSource for MockSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, SourceError> {
        self.respond("categories".to_string()).await?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn search_meals_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        self.respond(format!("search:{name}")).await?;
        Ok(self.searches.get(name).cloned())
    }

    async fn fetch_meals_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, SourceError> {
        self.respond(format!("filter:{category}")).await?;
        Ok(self.filters.get(category).cloned().flatten())
    }

    async fn fetch_meal_by_id(&self, id: &str) -> Result<Option<MealRecord>, SourceError> {
        self.respond(format!("lookup:{id}")).await?;
        Ok(self.meals.get(id).cloned())
    }
}
