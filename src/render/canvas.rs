use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::models::{Color, RectBounds};

/// Allocate a square canvas with every pixel set to `color`
pub fn new_canvas(size: u32, color: Color) -> Result<RgbImage> {
    if size == 0 {
        return Err(anyhow::anyhow!("Icon size must be at least 1 pixel"));
    }
    Ok(RgbImage::from_pixel(size, size, color.to_rgb()))
}

/// Fill `bounds` (inclusive) with `color`, clipped to the canvas
pub fn fill_rect(canvas: &mut RgbImage, bounds: RectBounds, color: Color) -> Result<()> {
    let x = i32::try_from(bounds.x0)?;
    let y = i32::try_from(bounds.y0)?;
    let rect = Rect::at(x, y).of_size(bounds.width(), bounds.height());
    draw_filled_rect_mut(canvas, rect, color.to_rgb());
    Ok(())
}

/// Encode as PNG, replacing any existing file
pub fn save_png(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
}
