use icongen::IconGenerator;
use image::RgbImage;
use std::path::Path;

/// Creates a generator that writes into a fresh temp directory.
/// Returns both the generator and the temp directory (which must be kept alive).
pub fn create_test_generator() -> (IconGenerator, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let generator = IconGenerator::new().with_output_dir(dir.path());
    (generator, dir)
}

/// Decodes a PNG written by the generator back into an RGB buffer.
pub fn load_icon(path: &Path) -> RgbImage {
    image::open(path)
        .expect("Failed to decode icon")
        .to_rgb8()
}

/// Color constants for tests
pub const BACKGROUND: [u8; 3] = [30, 30, 46];
pub const FOREGROUND: [u8; 3] = [137, 180, 250];
