use crate::foundation::core::Rgba8;
use crate::geometry::spiral::trace;
use crate::geometry::subdivide::{fit_golden_rect, subdivide};
use crate::render::surface::DrawSurface;
use crate::scene::model::SceneDef;
use crate::scene::palette::Palette;

/// Colors applied by [`paint_frame`] around the palette fills.
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    /// Clear color for the whole surface.
    pub background: Rgba8,
    /// Sub-rectangle border color.
    pub outline: Rgba8,
    /// Spiral polyline color.
    pub spiral: Rgba8,
}

impl From<&SceneDef> for FrameStyle {
    fn from(def: &SceneDef) -> Self {
        Self {
            background: def.background.to_rgba8(),
            outline: def.outline.to_rgba8(),
            spiral: def.spiral.to_rgba8(),
        }
    }
}

/// Per-frame paint counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Sub-rectangles filled and stroked.
    pub rects: usize,
    /// Points in the spiral polyline.
    pub spiral_points: usize,
}

/// Paint one frame of the construction onto `surface`.
///
/// Polls the viewport once, clears to the background, resets the palette
/// cursor, then paints the dissection in carve order and the spiral polyline
/// on top. Total for any viewport size; a degenerate viewport paints only the
/// background.
#[tracing::instrument(skip(surface, palette))]
pub fn paint_frame(
    surface: &mut dyn DrawSurface,
    style: FrameStyle,
    palette: &mut Palette,
) -> PaintStats {
    let vp = surface.viewport();
    surface.clear(style.background);
    palette.reset();

    let (rect, direction) = fit_golden_rect(f64::from(vp.width), f64::from(vp.height));
    let sub = subdivide(rect, direction);
    for r in &sub.rects {
        surface.fill_rect(*r, palette.next_color());
        surface.stroke_rect(*r, style.outline);
    }

    let spiral = trace(&sub.pivots);
    for pair in spiral.windows(2) {
        surface.stroke_line(pair[0], pair[1], style.spiral);
    }

    tracing::trace!(
        rects = sub.rects.len(),
        spiral_points = spiral.len(),
        "painted frame"
    );
    PaintStats {
        rects: sub.rects.len(),
        spiral_points: spiral.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
