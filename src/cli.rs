use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{Quality, RenderConfig, DEFAULT_RUN_TIME, FFMPEG_BIN},
    error::ConfigError,
    parsers::{parse_resolution, Resolution},
};

#[derive(Parser, Debug)]
#[command(name = "trifractal", about = "Render a Sierpinski triangle fractal, or a zoom in animation of one")]
pub struct Args {
    /// number of layers
    #[arg(value_parser = parse_layers)]
    pub layers: u32,

    /// render a zoom in animation
    #[arg(short, long)]
    pub animate: bool,

    /// render only the first frame
    #[arg(short, long)]
    pub save_image: bool,

    /// camera preset
    #[arg(short, long, value_enum, default_value_t = Quality::Low)]
    pub quality: Quality,

    /// override the preset size, e.g. 1920x1080 or 1920x1080@60
    #[arg(short, long, value_parser = parse_resolution)]
    pub resolution: Option<Resolution>,

    /// animation length in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_RUN_TIME)]
    pub run_time: f64,

    /// directory output files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// encoder binary used for animations
    #[arg(long, default_value = FFMPEG_BIN)]
    pub ffmpeg: String,
}

fn parse_layers(text: &str) -> Result<u32, String> {
    let layers: u32 = text.trim().parse().map_err(|e| format!("{}", e))?;
    if layers < 2 {
        return Err("Triangle fractals must have at least 2 layers".to_string());
    }
    Ok(layers)
}

pub enum Destination {
    Image {
        output: PathBuf,
    },
    Video {
        output: PathBuf,
        ffmpeg: String,
    },
}

pub struct Command {
    pub config: RenderConfig,
    pub destination: Destination,
}

impl Args {
    /// Animating is the default, saving a still image has to be asked for.
    pub fn animate(&self) -> bool {
        self.animate || !self.save_image
    }

    pub fn into_command(self) -> Result<Command, ConfigError> {
        let animate = self.animate();
        let mut camera = self.quality.camera();
        if let Some(resolution) = self.resolution {
            camera = camera.with_resolution(resolution);
        }
        let config = RenderConfig::new(self.layers, camera).with_run_time(self.run_time)?;
        let destination = if animate {
            Destination::Video {
                output: config.movie_path(&self.output_dir),
                ffmpeg: self.ffmpeg,
            }
        } else {
            Destination::Image { output: config.image_path(&self.output_dir) }
        };
        Ok(Command { config, destination })
    }
}
