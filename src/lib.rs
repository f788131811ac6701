//! Gnomon renders an animated golden-spiral construction.
//!
//! A viewport-filling rectangle is fitted to golden proportions, dissected
//! into a whirling-squares sequence of sub-rectangles, and a logarithmic
//! spiral is traced through the pivot corners the dissection leaves behind.
//! The crate is split the same way the picture is:
//!
//! - [`geometry`] holds the dissection and the spiral trace (pure functions)
//! - [`render`] paints one frame of the construction through a [`DrawSurface`]
//! - [`session`] runs the paint-present loop on a dedicated thread
//! - [`encode`] consumes presented frames ([`FrameSink`] implementations)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame sinks for presented frames.
pub mod encode;
/// Golden-section dissection and spiral tracing.
pub mod geometry;
/// Drawing surfaces and the frame painter.
pub mod render;
/// Scene description boundary.
pub mod scene;
/// Render-loop lifecycle.
pub mod session;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{GnomonError, GnomonResult};

pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::geometry::spiral::{SpiralParams, trace, trace_with};
pub use crate::geometry::subdivide::{Direction, Subdivision, fit_golden_rect, subdivide};
pub use crate::geometry::{MIN_EXTENT, PHI};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::painter::{FrameStyle, PaintStats, paint_frame};
pub use crate::render::surface::{DrawSurface, FrameRGBA, PresentSurface};
pub use crate::scene::color::ColorDef;
pub use crate::scene::model::{PaletteDef, SceneDef};
pub use crate::scene::palette::Palette;
pub use crate::session::render_loop::{RenderLoop, RenderLoopOpts, RenderStats};
