pub mod counter;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod render;

pub use counter::TextStats;
pub use generator::IconGenerator;
pub use models::{Color, IconSpec, RectBounds};
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, RenderStep};
