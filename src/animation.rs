//! Zoom animation over one level of the fractal.
//!
//! The first child of any expansion shares the seed's apex and is `layers` times smaller. Growing
//! the seed about its apex by a factor of `layers` therefore turns that child into a copy of the
//! starting seed, so the last frame leads seamlessly back into the first.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::{
    error::{AnimationError, FractalError, GenerateError},
    render::FrameRenderer,
    triangle::{check_radius, Triangle},
    video::FrameSink,
};

/// Radius added to the seed every frame so that `frame_count` steps scale it by `layers`.
pub fn growth_per_frame(radius: f64, layers: u32, frame_count: u32) -> Result<f64, AnimationError> {
    if frame_count == 0 {
        return Err(AnimationError::NoFrames);
    }
    Ok(radius * (layers as f64 - 1.0) / frame_count as f64)
}

pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos:>5}/{len:5} frames [{elapsed_precise}] eta {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

pub struct ZoomAnimation {
    seed: Triangle,
    layers: u32,
    frame_count: u32,
    growth: f64,
}

impl ZoomAnimation {
    pub fn new(seed: Triangle, layers: u32, frame_count: u32) -> Result<Self, AnimationError> {
        if layers < 2 {
            return Err(GenerateError::from(FractalError::TooFewLayers { layers }).into());
        }
        check_radius(seed.radius).map_err(GenerateError::from)?;
        let growth = growth_per_frame(seed.radius, layers, frame_count)?;
        Ok(ZoomAnimation { seed, layers, frame_count, growth })
    }

    pub fn seed(&self) -> &Triangle {
        &self.seed
    }

    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Renders every frame into `renderer` and hands it to `sink`, one at a time.
    ///
    /// The renderer is expected to start out cleared. It is cleared again after each frame. The sink
    /// is not finished here.
    pub fn run(
        &mut self,
        renderer: &mut FrameRenderer,
        sink: &mut impl FrameSink,
        progress: &ProgressBar,
    ) -> Result<(), AnimationError> {
        info!(
            "animating {} frames, radius {:.6} growing by {:.6e} per frame",
            self.frame_count, self.seed.radius, self.growth
        );
        for frame in 0..self.frame_count {
            let stats = renderer.render(&self.seed, self.layers)?;
            debug!("frame {}: {} triangles", frame, stats.drawn);
            sink.write_frame(renderer.frame())?;
            self.seed.update_position(self.growth);
            renderer.clear();
            progress.inc(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{seed_triangle, CameraConfig},
        error::VideoError,
        geometry::is_close,
        palette::Palette,
    };

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<u8>>,
        finished: bool,
    }

    impl FrameSink for Recorder {
        fn write_frame(&mut self, frame: &[u8]) -> Result<(), VideoError> {
            self.frames.push(frame.to_vec());
            Ok(())
        }

        fn finish(&mut self) -> Result<(), VideoError> {
            self.finished = true;
            Ok(())
        }
    }

    struct Broken;

    impl FrameSink for Broken {
        fn write_frame(&mut self, _frame: &[u8]) -> Result<(), VideoError> {
            Err(VideoError::Closed)
        }

        fn finish(&mut self) -> Result<(), VideoError> {
            Ok(())
        }
    }

    fn tiny_renderer() -> FrameRenderer {
        FrameRenderer::new(CameraConfig { pixel_width: 32, pixel_height: 18, frame_rate: 30 }, Palette::default()).unwrap()
    }

    #[test]
    fn growth_reaches_one_level_of_zoom() {
        let seed = seed_triangle();
        let growth = growth_per_frame(seed.radius, 3, 120).unwrap();
        let mut t = seed;
        for _ in 0..120 {
            t.update_position(growth);
        }
        assert!(is_close(t.radius, 3.0 * seed.radius));
        assert!(t.top_vertex().approx_eq(&seed.top_vertex()));
    }

    #[test]
    fn zero_frames_is_rejected() {
        assert!(matches!(growth_per_frame(1.0, 3, 0), Err(AnimationError::NoFrames)));
        assert!(matches!(ZoomAnimation::new(seed_triangle(), 3, 0), Err(AnimationError::NoFrames)));
    }

    #[test]
    fn too_few_layers_is_rejected() {
        assert!(matches!(
            ZoomAnimation::new(seed_triangle(), 1, 10),
            Err(AnimationError::Generate(GenerateError::Fractal(FractalError::TooFewLayers { layers: 1 })))
        ));
    }

    #[test]
    fn run_emits_every_frame_and_grows_seed() {
        let seed = seed_triangle();
        let mut animation = ZoomAnimation::new(seed, 3, 120).unwrap();
        let growth = animation.growth();
        let mut renderer = tiny_renderer();
        let mut recorder = Recorder::default();

        animation.run(&mut renderer, &mut recorder, &ProgressBar::hidden()).unwrap();

        assert_eq!(recorder.frames.len(), 120);
        assert!(!recorder.finished);
        assert_eq!(animation.growth(), growth);
        assert!(is_close(animation.seed().radius, 3.0 * seed.radius));
        assert!(is_close(animation.seed().radius, seed.radius + 120.0 * growth));
        assert!(animation.seed().top_vertex().approx_eq(&seed.top_vertex()));
    }

    #[test]
    fn frames_start_from_a_clear_canvas() {
        let mut renderer = tiny_renderer();
        let blank = renderer.frame().to_vec();
        let mut animation = ZoomAnimation::new(seed_triangle(), 2, 3).unwrap();
        let mut recorder = Recorder::default();
        animation.run(&mut renderer, &mut recorder, &ProgressBar::hidden()).unwrap();

        // The first frame matches a single render of the untouched seed
        let mut single = tiny_renderer();
        single.render(&seed_triangle(), 2).unwrap();
        assert_eq!(recorder.frames[0], single.frame());
        assert_ne!(recorder.frames[0], recorder.frames[1]);
        assert_eq!(renderer.frame(), &blank[..]);
    }

    #[test]
    fn sink_failure_aborts_the_run() {
        let seed = seed_triangle();
        let mut animation = ZoomAnimation::new(seed, 3, 10).unwrap();
        let result = animation.run(&mut tiny_renderer(), &mut Broken, &ProgressBar::hidden());
        assert!(matches!(result, Err(AnimationError::Video(VideoError::Closed))));
        assert!(is_close(animation.seed().radius, seed.radius));
    }
}
