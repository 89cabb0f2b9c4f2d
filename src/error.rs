use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Rejected arguments to the fractal generator. Raised before anything is drawn.
#[derive(Debug, Error, PartialEq)]
pub enum FractalError {
    #[error("triangle fractals must have at least 2 layers, got {layers}")]
    TooFewLayers { layers: u32 },
    #[error("row index cannot be negative, got {row_index}")]
    NegativeRowIndex { row_index: i64 },
    #[error("triangle radius must be finite and positive, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Failures of the drawing surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },
    #[error("polygon has no fillable area")]
    DegeneratePolygon,
    #[error("failed to write PNG to {path}: {reason}")]
    Png { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Fractal(#[from] FractalError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("failed to start encoder `{binary}`")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to encoder")]
    Io(#[from] std::io::Error),
    #[error("frame is {actual} bytes, encoder expects {expected}")]
    FrameSize { expected: usize, actual: usize },
    #[error("encoder exited with {status}")]
    EncoderFailed { status: ExitStatus },
    #[error("encoder input is already closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("an animation needs at least one frame")]
    NoFrames,
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Video(#[from] VideoError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid resolution `{0}`, expected WIDTHxHEIGHT or WIDTHxHEIGHT@FPS")]
    InvalidResolution(String),
    #[error("resolution and frame rate must be non-zero")]
    ZeroDimension,
    #[error("run time must be a positive number of seconds, got {0}")]
    InvalidRunTime(f64),
}
