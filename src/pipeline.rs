use anyhow::Result;
use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory that receives one snapshot per step
    pub output_dir: PathBuf,
}

/// Context available to all render steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all render steps must implement
pub trait RenderStep: Send + Sync {
    /// Take the canvas produced so far and return the next one
    fn apply(&self, canvas: RgbImage, context: &PipelineContext) -> Result<RgbImage>;

    /// Human-readable name for this step (used in verbose output and snapshot names)
    fn name(&self) -> &str;
}

/// Snapshot filename for a step, e.g. "02_centered_rectangle.png"
pub fn snapshot_filename(step_index: usize, step_name: &str) -> String {
    format!(
        "{:02}_{}.png",
        step_index + 1,
        step_name.to_lowercase().replace(' ', "_")
    )
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn RenderStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Replace the whole context
    pub fn with_context(mut self, context: PipelineContext) -> Self {
        self.context = context;
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        prepare_debug_dir(&output_dir)?;
        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn RenderStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, starting from an empty canvas
    pub fn run(&self) -> Result<RgbImage> {
        let mut canvas = RgbImage::new(0, 0);

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                println!("Running step: {}", step.name());
            }

            canvas = step.apply(canvas, &self.context)?;
            self.save_snapshot(&canvas, step_idx, step.name())?;
        }

        Ok(canvas)
    }

    fn save_snapshot(&self, canvas: &RgbImage, step_idx: usize, step_name: &str) -> Result<()> {
        let Some(debug_config) = &self.context.debug else {
            return Ok(());
        };
        if canvas.width() == 0 {
            return Ok(());
        }

        std::fs::create_dir_all(&debug_config.output_dir)?;
        let filename = snapshot_filename(step_idx, step_name);
        let output_path = debug_config.output_dir.join(&filename);
        canvas
            .save(&output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        if self.context.verbose {
            println!("  Debug: saved {}", output_path.display());
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensure a debug directory is usable: created if missing, rejected if not empty
pub fn prepare_debug_dir(output_dir: &std::path::Path) -> Result<()> {
    if output_dir.exists() {
        let entries = std::fs::read_dir(output_dir)?;
        if entries.count() > 0 {
            return Err(anyhow::anyhow!(
                "Debug directory is not empty: {}",
                output_dir.display()
            ));
        }
    } else {
        std::fs::create_dir_all(output_dir)?;
    }
    Ok(())
}
