//! Displayed state and the sinks that present it.
//!
//! A [`Frame`] is everything on screen at one moment. Sinks receive whole
//! frames, so each render fully replaces the previous output. Every sink
//! escapes remote text before it reaches its output.

use crate::model::{Category, MealDetail, MealSummary};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// Message shown for a meal list with no entries
pub const NO_MEALS_FOUND: &str = "No meals found";

/// Message shown when a request could not complete
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to format output: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Contents of a meal list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealList {
    Meals(Vec<MealSummary>),
    /// The request succeeded but matched nothing
    NoneFound,
}

impl MealList {
    /// Treats an absent or empty result as [`MealList::NoneFound`].
    pub fn from_results(meals: Option<Vec<MealSummary>>) -> Self {
        match meals {
            Some(meals) if !meals.is_empty() => MealList::Meals(meals),
            _ => MealList::NoneFound,
        }
    }
}

/// The single active content region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Nothing loaded yet
    #[default]
    Idle,
    Catalog(Vec<Category>),
    List(MealList),
    Detail(MealDetail),
    /// A request failed
    Unavailable,
}

/// Everything displayed at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub heading: String,
    /// Category shown above a category's meal list
    pub description: Option<Category>,
    /// Current contents of the search field
    pub search_text: String,
    /// Category names for the navigation menu
    pub menu: Vec<String>,
    pub view: ViewState,
}

/// Presents frames.
pub trait RenderSink: Send {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        (**self).render(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_results_are_none_found() {
        assert_eq!(MealList::from_results(None), MealList::NoneFound);
        assert_eq!(MealList::from_results(Some(vec![])), MealList::NoneFound);
    }

    #[test]
    fn test_results_are_kept() {
        let meal = MealSummary {
            id: "1".to_string(),
            name: "Toast".to_string(),
            thumbnail_url: String::new(),
        };
        assert_eq!(
            MealList::from_results(Some(vec![meal.clone()])),
            MealList::Meals(vec![meal])
        );
    }

    #[test]
    fn test_default_frame_is_idle() {
        let frame = Frame::default();
        assert_eq!(frame.view, ViewState::Idle);
        assert!(frame.heading.is_empty());
        assert!(frame.description.is_none());
    }
}
