use super::{PipelineError, RenderPipeline};
use crate::source::RecipeDataSource;
use crate::view::{Frame, RenderError, RenderSink, ViewState, SOMETHING_WENT_WRONG};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Heading shown above the category catalog
pub const CATALOG_HEADING: &str = "Categories";

/// What a user action did to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new frame was rendered
    Rendered,
    /// The action was ignored and the previous frame is still shown
    Unchanged,
}

struct Display<R> {
    frame: Frame,
    sink: R,
}

/// Event-driven controller over a [`RenderPipeline`].
///
/// Each user action issues one request, then applies its frame changes and
/// renders once the response arrives. Actions may overlap; the frame always
/// reflects whichever response resolved last, regardless of the order the
/// actions were issued in.
pub struct Browser<S, R> {
    pipeline: RenderPipeline<S>,
    display: Mutex<Display<R>>,
}

impl<S: RecipeDataSource, R: RenderSink> Browser<S, R> {
    pub fn new(pipeline: RenderPipeline<S>, sink: R) -> Self {
        Browser {
            pipeline,
            display: Mutex::new(Display {
                frame: Frame::default(),
                sink,
            }),
        }
    }

    pub fn pipeline(&self) -> &RenderPipeline<S> {
        &self.pipeline
    }

    /// The frame currently on display.
    pub async fn frame(&self) -> Frame {
        self.display.lock().await.frame.clone()
    }

    pub async fn with_sink<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.display.lock().await.sink)
    }

    pub fn into_sink(self) -> R {
        self.display.into_inner().sink
    }

    /// Initial load, home button and logo.
    ///
    /// Clears heading, description and search text, then shows the catalog.
    pub async fn open_home(&self) -> Result<Outcome, RenderError> {
        self.apply(|frame| {
            frame.heading.clear();
            frame.description = None;
            frame.search_text.clear();
            frame.view = ViewState::Idle;
        })
        .await?;

        match self.pipeline.load_catalog().await {
            Ok(view) => {
                let menu = match &view {
                    ViewState::Catalog(categories) => {
                        categories.iter().map(|c| c.name.clone()).collect()
                    }
                    _ => Vec::new(),
                };
                self.apply(move |frame| {
                    frame.heading = CATALOG_HEADING.to_string();
                    frame.menu = menu;
                    frame.view = view;
                })
                .await
            }
            Err(e) => self.fail(e).await,
        }
    }

    /// Category card or menu entry click.
    pub async fn select_category(&self, name: &str) -> Result<Outcome, RenderError> {
        match self.pipeline.filter_by_category(name).await {
            Ok(view) => {
                let description = self.pipeline.describe_category(name);
                let heading = format!("Category >> {name}");
                self.apply(move |frame| {
                    frame.heading = heading;
                    frame.description = description;
                    frame.view = view;
                })
                .await
            }
            Err(e) => self.fail(e).await,
        }
    }

    /// Search form submit. Blank input is ignored.
    pub async fn submit_search(&self, text: &str) -> Result<Outcome, RenderError> {
        let query = text.trim();
        match self.pipeline.search_meals(query).await {
            Ok(Some(view)) => {
                let heading = format!("Search results for \"{query}\"");
                let search_text = query.to_string();
                self.apply(move |frame| {
                    frame.heading = heading;
                    frame.description = None;
                    frame.search_text = search_text;
                    frame.view = view;
                })
                .await
            }
            Ok(None) => Ok(Outcome::Unchanged),
            Err(e) => self.fail(e).await,
        }
    }

    /// Meal card click. An unknown id leaves the current frame in place.
    pub async fn open_meal(&self, id: &str) -> Result<Outcome, RenderError> {
        match self.pipeline.lookup_meal_detail(id).await {
            Ok(meal) => {
                self.apply(move |frame| {
                    frame.heading = meal.name.clone();
                    frame.view = ViewState::Detail(meal);
                })
                .await
            }
            Err(e) => self.fail(e).await,
        }
    }

    async fn fail(&self, error: PipelineError) -> Result<Outcome, RenderError> {
        match error {
            PipelineError::NotFound { id } => {
                info!(id = %id, "meal not found, keeping current view");
                Ok(Outcome::Unchanged)
            }
            PipelineError::NetworkFailure(e) => {
                warn!(error = %e, "request failed");
                self.apply(|frame| {
                    frame.heading = SOMETHING_WENT_WRONG.to_string();
                    frame.description = None;
                    frame.view = ViewState::Unavailable;
                })
                .await
            }
        }
    }

    async fn apply(&self, change: impl FnOnce(&mut Frame) + Send) -> Result<Outcome, RenderError> {
        let mut display = self.display.lock().await;
        let Display { frame, sink } = &mut *display;
        change(frame);
        sink.render(frame)?;
        Ok(Outcome::Rendered)
    }
}
