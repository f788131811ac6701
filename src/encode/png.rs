use std::path::PathBuf;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GnomonError, GnomonResult};
use crate::render::surface::FrameRGBA;

/// Sink writing each frame as a numbered PNG into a directory.
///
/// Files are named `frame_00000.png`, `frame_00001.png`, … in push order. The
/// directory is created on `begin` if missing.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Create a sink targeting `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a given frame index is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, _cfg: SinkConfig) -> GnomonResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            GnomonError::render(format!("create frame dir '{}': {e}", self.dir.display()))
        })
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GnomonResult<()> {
        let path = self.frame_path(idx);
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GnomonError::render(format!("write png '{}': {e}", path.display())))
    }

    fn end(&mut self) -> GnomonResult<()> {
        Ok(())
    }
}
