//! Turns data-source responses into view state.
//!
//! [`RenderPipeline`] owns the normalization rules and the per-session
//! category list. [`Browser`] drives it from user actions and pushes the
//! resulting frames to a render sink.

use crate::model::{Category, MealDetail};
use crate::source::{RecipeDataSource, SourceError};
use crate::view::{MealList, ViewState};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::debug;

mod browser;
#[cfg(test)]
pub(crate) mod testing;

pub use browser::{Browser, Outcome};

/// Errors that can occur at the pipeline boundary.
///
/// An empty result is not an error: it is [`MealList::NoneFound`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] SourceError),

    #[error("Meal not found: {id}")]
    NotFound { id: String },
}

/// State kept for the lifetime of one browsing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    categories: Vec<Category>,
}

impl Session {
    /// Categories from the most recent catalog load.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Converts recipe API responses into [`ViewState`]s.
///
/// Methods take `&self` and may run concurrently. Nothing orders or
/// cancels overlapping requests: each returns whatever its own response
/// produced, whenever that response arrives.
pub struct RenderPipeline<S> {
    source: S,
    session: RwLock<Session>,
}

impl<S: RecipeDataSource> RenderPipeline<S> {
    pub fn new(source: S) -> Self {
        RenderPipeline {
            source,
            session: RwLock::new(Session::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the session state.
    pub fn session(&self) -> Session {
        self.read_session().clone()
    }

    /// Fetches every category and stores it as the session's category list.
    ///
    /// An empty response produces an empty catalog.
    pub async fn load_catalog(&self) -> Result<ViewState, PipelineError> {
        let categories = self.source.fetch_categories().await?;
        debug!(count = categories.len(), "catalog loaded");

        self.write_session().categories = categories.clone();
        Ok(ViewState::Catalog(categories))
    }

    /// Searches meals by name.
    ///
    /// Returns `Ok(None)` without touching the data source when the trimmed
    /// query is empty.
    pub async fn search_meals(&self, query: &str) -> Result<Option<ViewState>, PipelineError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let meals = self.source.search_meals_by_name(query).await?;
        debug!(query, count = meals.as_ref().map_or(0, Vec::len), "search resolved");
        Ok(Some(ViewState::List(MealList::from_results(meals))))
    }

    /// Lists the meals in a category.
    pub async fn filter_by_category(&self, name: &str) -> Result<ViewState, PipelineError> {
        let meals = self.source.fetch_meals_by_category(name).await?;
        debug!(category = name, count = meals.as_ref().map_or(0, Vec::len), "filter resolved");
        Ok(ViewState::List(MealList::from_results(meals)))
    }

    /// Fetches and normalizes one meal.
    pub async fn lookup_meal_detail(&self, id: &str) -> Result<MealDetail, PipelineError> {
        let record = self
            .source
            .fetch_meal_by_id(id)
            .await?
            .ok_or_else(|| PipelineError::NotFound { id: id.to_string() })?;
        Ok(MealDetail::from_record(&record))
    }

    /// Looks a category up by exact name in the session. Never hits the network.
    pub fn describe_category(&self, name: &str) -> Option<Category> {
        self.read_session().find(name).cloned()
    }

    /// Names of the session's categories, in API order.
    pub fn category_names(&self) -> Vec<String> {
        self.read_session()
            .categories
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    fn read_session(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_session(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
