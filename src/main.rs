use std::{fs, time::Instant};

use anyhow::Context;
use clap::Parser;
use log::info;

use animation::{progress_bar, ZoomAnimation};
use cli::{Command, Destination};
use render::FrameRenderer;
use video::{FfmpegPipe, FrameSink};

pub mod animation;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod fractal;
pub mod geometry;
pub mod palette;
pub mod parsers;
pub mod render;
pub mod triangle;
pub mod video;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = cli::Args::parse().into_command()?;
    run(command)
}

fn run(command: Command) -> anyhow::Result<()> {
    let Command { config, destination } = command;
    let camera = config.camera;
    let seed = crate::config::seed_triangle();
    let mut renderer = FrameRenderer::new(camera, config.palette)?;
    info!(
        "{} layers at {}x{}",
        config.layers, camera.pixel_width, camera.pixel_height
    );

    let start = Instant::now();
    match destination {
        Destination::Image { output } => {
            create_parent(&output)?;
            renderer.render(&seed, config.layers)?;
            renderer
                .save(&output)
                .with_context(|| format!("saving {}", output.display()))?;
            info!("wrote {}", output.display());
        }
        Destination::Video { output, ffmpeg } => {
            create_parent(&output)?;
            let frame_count = config.frame_count();
            let mut animation = ZoomAnimation::new(seed, config.layers, frame_count)?;
            let mut pipe = FfmpegPipe::open(&ffmpeg, &output, &camera)
                .with_context(|| format!("opening encoder for {}", output.display()))?;
            let progress = progress_bar(frame_count as u64);
            animation.run(&mut renderer, &mut pipe, &progress)?;
            progress.finish();
            pipe.finish()?;
        }
    }
    info!("done in {:?}", start.elapsed());
    Ok(())
}

fn create_parent(output: &std::path::Path) -> anyhow::Result<()> {
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}
