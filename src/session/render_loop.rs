use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GnomonError, GnomonResult};
use crate::render::painter::{FrameStyle, paint_frame};
use crate::render::surface::PresentSurface;
use crate::scene::palette::Palette;

/// Options controlling a [`RenderLoop`] run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderLoopOpts {
    /// Stop on its own after this many frames. `None` runs until
    /// [`RenderLoop::stop`].
    pub max_frames: Option<u64>,
}

/// Loop run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames painted and presented to the sink.
    pub frames_presented: u64,
}

/// Free-running render thread: paint a frame, present it, repeat.
///
/// The loop checks its running flag between frames only — a frame in progress
/// always completes and reaches the sink before the thread exits. The sink
/// sees `begin` once, `push_frame` with strictly increasing indices, then
/// `end` once.
pub struct RenderLoop<K: FrameSink> {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<GnomonResult<(RenderStats, K)>>>,
}

impl<K: FrameSink + 'static> RenderLoop<K> {
    /// Spawn the render thread.
    ///
    /// `sink.begin` runs before the first frame with the surface's viewport
    /// size; ownership of the sink returns through [`join`](Self::join) or
    /// [`stop`](Self::stop).
    pub fn start<S>(
        mut surface: S,
        style: FrameStyle,
        mut palette: Palette,
        mut sink: K,
        opts: RenderLoopOpts,
    ) -> GnomonResult<Self>
    where
        S: PresentSurface + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = std::thread::Builder::new()
            .name("gnomon-render".to_owned())
            .spawn(move || -> GnomonResult<(RenderStats, K)> {
                let vp = surface.viewport();
                sink.begin(SinkConfig {
                    width: vp.width,
                    height: vp.height,
                })?;

                let mut frames = 0u64;
                while flag.load(Ordering::SeqCst) {
                    if let Some(max) = opts.max_frames
                        && frames >= max
                    {
                        break;
                    }
                    paint_frame(&mut surface, style, &mut palette);
                    sink.push_frame(FrameIndex(frames), &surface.present())?;
                    frames += 1;
                }

                sink.end()?;
                tracing::debug!(frames, "render loop finished");
                Ok((
                    RenderStats {
                        frames_presented: frames,
                    },
                    sink,
                ))
            })
            .map_err(|e| GnomonError::render(format!("spawn render thread: {e}")))?;

        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    /// Return `true` while the render thread is still looping.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the loop to stop after the frame in flight, then wait for it.
    pub fn stop(self) -> GnomonResult<(RenderStats, K)> {
        self.running.store(false, Ordering::SeqCst);
        self.join()
    }

    /// Wait for the loop to finish: on its own for bounded runs, or after a
    /// [`stop`](Self::stop) signal otherwise.
    pub fn join(mut self) -> GnomonResult<(RenderStats, K)> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| GnomonError::render("render loop already joined"))?;
        handle
            .join()
            .map_err(|_| GnomonError::render("render thread panicked"))?
    }
}

impl<K: FrameSink> Drop for RenderLoop<K> {
    fn drop(&mut self) {
        // A dropped handle detaches the thread; clear the flag so an
        // unbounded loop does not spin forever.
        self.running.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_loop.rs"]
mod tests;
