use std::path::PathBuf;

use anyhow::Result;
use image::RgbImage;

use crate::models::{Color, RectBounds};
use crate::pipeline::{PipelineContext, RenderStep};
use crate::render::canvas;

/// Start a fresh square canvas in a solid color (the incoming canvas is discarded)
pub struct FillBackgroundStep {
    pub size: u32,
    pub color: Color,
}

impl RenderStep for FillBackgroundStep {
    fn apply(&self, _canvas: RgbImage, _context: &PipelineContext) -> Result<RgbImage> {
        canvas::new_canvas(self.size, self.color)
    }

    fn name(&self) -> &str {
        "Fill Background"
    }
}

/// Draw the inset square, sized from the canvas itself
pub struct CenteredRectStep {
    pub color: Color,
}

impl RenderStep for CenteredRectStep {
    fn apply(&self, mut image: RgbImage, context: &PipelineContext) -> Result<RgbImage> {
        if image.width() != image.height() {
            return Err(anyhow::anyhow!(
                "Expected a square canvas, got {}x{}",
                image.width(),
                image.height()
            ));
        }

        let bounds = RectBounds::centered(image.width());
        if context.verbose {
            println!(
                "  rect ({}, {})-({}, {}) {}",
                bounds.x0, bounds.y0, bounds.x1, bounds.y1, self.color
            );
        }

        canvas::fill_rect(&mut image, bounds, self.color)?;
        Ok(image)
    }

    fn name(&self) -> &str {
        "Centered Rectangle"
    }
}

/// Write the canvas to disk and pass it through unchanged
pub struct SavePngStep {
    pub path: PathBuf,
}

impl RenderStep for SavePngStep {
    fn apply(&self, image: RgbImage, context: &PipelineContext) -> Result<RgbImage> {
        canvas::save_png(&image, &self.path)?;
        if context.verbose {
            println!("  wrote {}", self.path.display());
        }
        Ok(image)
    }

    fn name(&self) -> &str {
        "Save PNG"
    }
}
