#[allow(dead_code)]
mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from icongen for tests
#[allow(unused_imports)]
pub use icongen::{Color, IconGenerator, IconSpec, RectBounds};
