pub mod config;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod view;

pub use config::{Config, ConfigError};
pub use model::*;
pub use pipeline::{Browser, Outcome, PipelineError, RenderPipeline};
pub use source::{MealDbClient, RecipeDataSource, SourceError};
pub use view::{Frame, HtmlRenderer, MealList, RenderError, RenderSink, TextRenderer, ViewState};
