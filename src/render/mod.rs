pub mod canvas;
pub mod steps;

pub use steps::{CenteredRectStep, FillBackgroundStep, SavePngStep};
