use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use log::{debug, info};

use crate::{config::CameraConfig, error::VideoError};

/// Consumes finished frames in the order they are produced.
pub trait FrameSink {
    /// Takes one RGBA frame. Blocks until the frame is accepted.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), VideoError>;

    /// Signals that no more frames follow and waits for the output to be complete.
    fn finish(&mut self) -> Result<(), VideoError>;
}

/// Streams raw RGBA frames into an `ffmpeg` process that encodes them as H.264.
pub struct FfmpegPipe {
    child: Child,
    stdin: Option<ChildStdin>,
    frame_len: usize,
    output: PathBuf,
}

/// Arguments for encoding raw RGBA frames of the camera's size into `output`.
pub fn ffmpeg_args(camera: &CameraConfig, output: &Path) -> Vec<String> {
    let size = format!("{}x{}", camera.pixel_width, camera.pixel_height);
    let rate = camera.frame_rate.to_string();
    let output = output.to_string_lossy();
    [
        "-y", "-f", "rawvideo", "-vcodec", "rawvideo",
        "-s", size.as_str(),
        "-pix_fmt", "rgba",
        "-r", rate.as_str(),
        "-i", "-",
        "-an",
        "-vcodec", "libx264",
        "-pix_fmt", "yuv420p",
        "-loglevel", "error",
        &*output,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl FfmpegPipe {
    pub fn open(binary: &str, output: impl AsRef<Path>, camera: &CameraConfig) -> Result<Self, VideoError> {
        let output = output.as_ref().to_path_buf();
        let args = ffmpeg_args(camera, &output);
        debug!("{} {}", binary, args.join(" "));
        let mut child = Command::new(binary)
            .args(&args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| VideoError::Spawn { binary: binary.to_string(), source })?;
        let stdin = child.stdin.take();
        Ok(FfmpegPipe {
            child,
            stdin,
            frame_len: camera.pixel_width as usize * camera.pixel_height as usize * 4,
            output,
        })
    }
}

impl FrameSink for FfmpegPipe {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), VideoError> {
        if frame.len() != self.frame_len {
            return Err(VideoError::FrameSize { expected: self.frame_len, actual: frame.len() });
        }
        let stdin = self.stdin.as_mut().ok_or(VideoError::Closed)?;
        stdin.write_all(frame)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), VideoError> {
        // Dropping stdin sends EOF, which tells ffmpeg to finalize the file
        drop(self.stdin.take().ok_or(VideoError::Closed)?);
        let status = self.child.wait()?;
        if !status.success() {
            return Err(VideoError::EncoderFailed { status });
        }
        info!("wrote {}", self.output.display());
        Ok(())
    }
}
