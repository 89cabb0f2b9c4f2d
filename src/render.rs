use std::path::Path;

use log::debug;

use crate::{
    canvas::Canvas,
    config::CameraConfig,
    error::{GenerateError, RenderError},
    fractal::{self, GenerateStats},
    palette::Palette,
    triangle::Triangle,
};

/// Owns the pixel buffer frames are drawn into.
///
/// Rendering never clears on its own. Callers drawing more than one frame clear between them.
pub struct FrameRenderer {
    canvas: Canvas,
}

impl FrameRenderer {
    /// A renderer sized to `camera`, already painted with the background.
    pub fn new(camera: CameraConfig, palette: Palette) -> Result<Self, RenderError> {
        let canvas = Canvas::new(camera.pixel_width, camera.pixel_height, palette)?;
        Ok(FrameRenderer { canvas })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn clear(&mut self) {
        self.canvas.paint_background();
    }

    pub fn render(&mut self, seed: &Triangle, layers: u32) -> Result<GenerateStats, GenerateError> {
        let stats = fractal::generate(&mut self.canvas, seed, layers)?;
        debug!(
            "rendered {} triangles over {} expansions, {} levels deep",
            stats.drawn, stats.expansions, stats.max_depth
        );
        Ok(stats)
    }

    /// The current frame as RGBA bytes.
    pub fn frame(&self) -> &[u8] {
        self.canvas.data()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn save(&self, filename: impl AsRef<Path>) -> Result<(), RenderError> {
        self.canvas.save_png(filename)
    }
}
