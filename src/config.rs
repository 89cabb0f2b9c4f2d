use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::{
    error::ConfigError,
    geometry::Point,
    palette::Palette,
    parsers::Resolution,
    triangle::Triangle,
};

/// Seed triangle placement. With a radius of 2/3 the apex touches the top edge of the canvas and the
/// base touches the bottom edge.
pub const CENTROID_Y: f64 = 1.0 / 6.0;
pub const RADIUS: f64 = 2.0 / 3.0;

pub const DEFAULT_FILENAME: &str = "triangle";
pub const DEFAULT_MOVIE_EXTENSION: &str = "mp4";
pub const FFMPEG_BIN: &str = "ffmpeg";
pub const DEFAULT_RUN_TIME: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub frame_rate: u32,
}

pub const PRODUCTION_QUALITY_CAMERA_CONFIG: CameraConfig = CameraConfig { pixel_width: 2560, pixel_height: 1440, frame_rate: 60 };
pub const HIGH_QUALITY_CAMERA_CONFIG: CameraConfig = CameraConfig { pixel_width: 1920, pixel_height: 1080, frame_rate: 60 };
pub const MEDIUM_QUALITY_CAMERA_CONFIG: CameraConfig = CameraConfig { pixel_width: 1280, pixel_height: 720, frame_rate: 30 };
pub const LOW_QUALITY_CAMERA_CONFIG: CameraConfig = CameraConfig { pixel_width: 854, pixel_height: 480, frame_rate: 30 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Quality {
    #[default]
    Low,
    Medium,
    High,
    Production,
}

impl Quality {
    pub fn camera(self) -> CameraConfig {
        match self {
            Quality::Low => LOW_QUALITY_CAMERA_CONFIG,
            Quality::Medium => MEDIUM_QUALITY_CAMERA_CONFIG,
            Quality::High => HIGH_QUALITY_CAMERA_CONFIG,
            Quality::Production => PRODUCTION_QUALITY_CAMERA_CONFIG,
        }
    }
}

impl CameraConfig {
    /// Replaces the pixel size, and the frame rate if one was given.
    pub fn with_resolution(self, resolution: Resolution) -> Self {
        CameraConfig {
            pixel_width: resolution.width,
            pixel_height: resolution.height,
            frame_rate: resolution.frame_rate.unwrap_or(self.frame_rate),
        }
    }
}

/// The top level triangle every render starts from.
pub fn seed_triangle() -> Triangle {
    Triangle::new(Point::new(0.0, CENTROID_Y), RADIUS)
}

/// Everything a render needs besides its destination.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub layers: u32,
    pub camera: CameraConfig,
    pub palette: Palette,
    pub run_time: f64,
}

impl RenderConfig {
    pub fn new(layers: u32, camera: CameraConfig) -> Self {
        RenderConfig {
            layers,
            camera,
            palette: Palette::default(),
            run_time: DEFAULT_RUN_TIME,
        }
    }

    pub fn with_run_time(mut self, run_time: f64) -> Result<Self, ConfigError> {
        if !(run_time.is_finite() && run_time > 0.0) {
            return Err(ConfigError::InvalidRunTime(run_time));
        }
        self.run_time = run_time;
        Ok(self)
    }

    /// Number of frames in an animation, `run_time * frame_rate`.
    pub fn frame_count(&self) -> u32 {
        (self.run_time * self.camera.frame_rate as f64).round() as u32
    }

    pub fn image_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_layers.png", self.layers))
    }

    pub fn movie_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_{}_layers.{}", DEFAULT_FILENAME, self.layers, DEFAULT_MOVIE_EXTENSION))
    }
}
