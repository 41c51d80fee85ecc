use std::path::PathBuf;

use anyhow::Result;
use image::RgbImage;

use crate::models::{Color, IconSpec};
use crate::pipeline::{self, DebugConfig, Pipeline, PipelineContext};
use crate::render::{CenteredRectStep, FillBackgroundStep, SavePngStep};

/// Draws square icons: a solid background with a centered filled square,
/// written as `icon{size}.png`.
#[derive(Debug, Clone)]
pub struct IconGenerator {
    pub background: Color,
    pub foreground: Color,
    pub output_dir: PathBuf,
    pub verbose: bool,
    debug_dir: Option<PathBuf>,
}

impl IconGenerator {
    pub fn new() -> Self {
        Self {
            background: Color::BACKGROUND,
            foreground: Color::FOREGROUND,
            output_dir: PathBuf::from("."),
            verbose: false,
            debug_dir: None,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Save a snapshot after every step under `dir/{size}/`.
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, dir: PathBuf) -> Result<Self> {
        pipeline::prepare_debug_dir(&dir)?;
        self.debug_dir = Some(dir);
        Ok(self)
    }

    pub fn spec(&self, size: u32) -> IconSpec {
        IconSpec {
            size,
            background: self.background,
            foreground: self.foreground,
        }
    }

    /// Where `generate(size)` writes
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(self.spec(size).file_name())
    }

    /// Draw the icon in memory; nothing is written, debug snapshots included
    pub fn render(&self, size: u32) -> Result<RgbImage> {
        self.build_pipeline(size, false).run()
    }

    /// Draw the icon and write it to `icon{size}.png`, replacing any existing file
    pub fn generate(&self, size: u32) -> Result<PathBuf> {
        if self.verbose {
            println!("\nGenerating {}x{} icon...", size, size);
        }
        self.build_pipeline(size, true).run()?;
        Ok(self.output_path(size))
    }

    /// Generate each size in order, stopping at the first failure
    pub fn generate_all(&self, sizes: &[u32]) -> Result<Vec<PathBuf>> {
        sizes.iter().map(|&size| self.generate(size)).collect()
    }

    /// Snapshots are only taken when the icon is also written
    fn build_pipeline(&self, size: u32, save: bool) -> Pipeline {
        let spec = self.spec(size);
        let debug_dir = self.debug_dir.as_ref().filter(|_| save);
        let context = PipelineContext {
            verbose: self.verbose,
            debug: debug_dir.map(|dir| DebugConfig {
                output_dir: dir.join(size.to_string()),
            }),
        };

        let mut pipeline = Pipeline::new()
            .with_context(context)
            .add_step_boxed(Box::new(FillBackgroundStep {
                size: spec.size,
                color: spec.background,
            }))
            .add_step_boxed(Box::new(CenteredRectStep {
                color: spec.foreground,
            }));

        if save {
            pipeline = pipeline.add_step_boxed(Box::new(SavePngStep {
                path: self.output_path(size),
            }));
        }
        pipeline
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new()
    }
}
