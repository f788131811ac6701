use crate::foundation::core::{Point, Rect};
use crate::geometry::{MIN_EXTENT, PHI};

/// The edge from which the next square is carved off.
///
/// Advances one step per carve in the fixed order
/// Left → Top → Right → Down → Left …, whatever the starting edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Carve a square off the left edge.
    Left,
    /// Carve a square off the top edge.
    Top,
    /// Carve a square off the right edge.
    Right,
    /// Carve a square off the bottom edge.
    Down,
}

impl Direction {
    /// The next edge in carve order.
    pub fn next(self) -> Self {
        match self {
            Self::Left => Self::Top,
            Self::Top => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
        }
    }
}

/// Ordered output of a whirling-squares dissection.
///
/// Both sequences are in carve order, outermost rectangle first. One pivot is
/// recorded per rectangle, so the lengths always match; the last pivot is the
/// limit point the spiral converges toward.
#[derive(Clone, Debug, Default)]
pub struct Subdivision {
    /// Rectangles to paint, outermost first.
    pub rects: Vec<Rect>,
    /// Pivot corner recorded at each carve step.
    pub pivots: Vec<Point>,
}

/// Dissect `rect` into a whirling-squares sequence.
///
/// Each step records the current rectangle and its pivot corner, then removes
/// a square whose side is the shorter dimension from the `direction` edge,
/// leaving a smaller golden-proportioned remainder. Stops once either
/// dimension falls below [`MIN_EXTENT`]; a degenerate input yields an empty
/// [`Subdivision`].
pub fn subdivide(rect: Rect, direction: Direction) -> Subdivision {
    let mut out = Subdivision::default();
    let (mut x, mut y) = (rect.x0, rect.y0);
    let (mut w, mut h) = (rect.width(), rect.height());
    let mut dir = direction;

    while w >= MIN_EXTENT && h >= MIN_EXTENT {
        out.rects.push(Rect::new(x, y, x + w, y + h));
        match dir {
            Direction::Left => {
                out.pivots.push(Point::new(x, y + h));
                x += h;
                w -= h;
            }
            Direction::Top => {
                out.pivots.push(Point::new(x, y));
                y += w;
                h -= w;
            }
            Direction::Right => {
                out.pivots.push(Point::new(x + w, y));
                w -= h;
            }
            Direction::Down => {
                out.pivots.push(Point::new(x + w, y + h));
                h -= w;
            }
        }
        dir = dir.next();
    }
    out
}

/// Fit the largest centered golden rectangle into a viewport and pick the
/// starting carve edge.
///
/// Landscape viewports start [`Direction::Left`], portrait and square
/// viewports start [`Direction::Top`]. The rectangle keeps the limiting
/// viewport dimension and forces the other to aspect ratio φ, centered on
/// both axes. Total for any finite size, including zero.
pub fn fit_golden_rect(width: f64, height: f64) -> (Rect, Direction) {
    let (dir, w, h) = if width > height {
        if width / height > PHI {
            (Direction::Left, height * PHI, height)
        } else {
            (Direction::Left, width, width / PHI)
        }
    } else if height / width > PHI {
        (Direction::Top, width, width * PHI)
    } else {
        (Direction::Top, height / PHI, height)
    };
    let x = (width - w) / 2.0;
    let y = (height - h) / 2.0;
    (Rect::new(x, y, x + w, y + h), dir)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/subdivide.rs"]
mod tests;
