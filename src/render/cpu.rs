use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::render::surface::{DrawSurface, FrameRGBA, PresentSurface};

// Quantize a viewport coordinate: truncate toward zero, with far-out values
// clamped so the i64 clip arithmetic below cannot overflow. NaN becomes 0.
fn quant(v: f64) -> i64 {
    v.clamp(-1.0e9, 1.0e9) as i64
}

/// Software raster surface over a raw RGBA8 buffer.
///
/// Quantization matches the classic integer raster model: coordinates
/// truncate toward zero, fills cover `[x, x+w) × [y, y+h)`, strokes sit on
/// the rectangle border inclusive of the far edge.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CpuSurface {
    /// Create a surface of the given pixel size, cleared to transparent black.
    pub fn new(canvas: Canvas) -> Self {
        let len = (canvas.width as usize) * (canvas.height as usize) * 4;
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; len],
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgba8) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = x0.max(0);
        let end = x1.min(i64::from(self.width) - 1);
        if start > end {
            return;
        }
        let px = color.to_array();
        let mut idx = ((y as usize) * (self.width as usize) + (start as usize)) * 4;
        for _ in start..=end {
            self.data[idx..idx + 4].copy_from_slice(&px);
            idx += 4;
        }
    }

    fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Rgba8) {
        if x < 0 || x >= i64::from(self.width) {
            return;
        }
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let start = y0.max(0);
        let end = y1.min(i64::from(self.height) - 1);
        if start > end {
            return;
        }
        let px = color.to_array();
        let stride = (self.width as usize) * 4;
        let mut idx = ((start as usize) * (self.width as usize) + (x as usize)) * 4;
        for _ in start..=end {
            self.data[idx..idx + 4].copy_from_slice(&px);
            idx += stride;
        }
    }

    // Cohen-Sutherland outcode clip, so the Bresenham walk never leaves the
    // surface and never crawls a far-off-screen segment pixel by pixel.
    fn clip_segment(
        &self,
        mut x0: i64,
        mut y0: i64,
        mut x1: i64,
        mut y1: i64,
    ) -> Option<(i64, i64, i64, i64)> {
        const INSIDE: u8 = 0;
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const TOP: u8 = 4;
        const BOTTOM: u8 = 8;

        let w = i64::from(self.width);
        let h = i64::from(self.height);
        if w == 0 || h == 0 {
            return None;
        }

        let outcode = |x: i64, y: i64| -> u8 {
            let mut code = INSIDE;
            if x < 0 {
                code |= LEFT;
            } else if x >= w {
                code |= RIGHT;
            }
            if y < 0 {
                code |= TOP;
            } else if y >= h {
                code |= BOTTOM;
            }
            code
        };

        let mut code0 = outcode(x0, y0);
        let mut code1 = outcode(x1, y1);

        // Converges in a few passes; the bound guards saturated-cast input.
        for _ in 0..16 {
            if code0 | code1 == 0 {
                return Some((x0, y0, x1, y1));
            }
            if code0 & code1 != 0 {
                return None;
            }

            let out = if code0 != 0 { code0 } else { code1 };
            let dx = x1 - x0;
            let dy = y1 - y0;

            let (x, y) = if out & BOTTOM != 0 {
                if dy == 0 {
                    return None;
                }
                (x0 + dx * (h - 1 - y0) / dy, h - 1)
            } else if out & TOP != 0 {
                if dy == 0 {
                    return None;
                }
                (x0 + dx * (-y0) / dy, 0)
            } else if out & RIGHT != 0 {
                if dx == 0 {
                    return None;
                }
                (w - 1, y0 + dy * (w - 1 - x0) / dx)
            } else {
                if dx == 0 {
                    return None;
                }
                (0, y0 + dy * (-x0) / dx)
            };

            if out == code0 {
                x0 = x;
                y0 = y;
                code0 = outcode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = outcode(x1, y1);
            }
        }
        None
    }
}

impl DrawSurface for CpuSurface {
    fn viewport(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    fn clear(&mut self, color: Rgba8) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        let x = quant(rect.x0);
        let y = quant(rect.y0);
        let w = quant(rect.width());
        let h = quant(rect.height());
        if w <= 0 || h <= 0 {
            return;
        }
        let row_start = y.max(0);
        let row_end = (y + h).min(i64::from(self.height));
        for row in row_start..row_end {
            self.hline(x, x + w - 1, row, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba8) {
        let x0 = quant(rect.x0);
        let y0 = quant(rect.y0);
        let x1 = quant(rect.x1);
        let y1 = quant(rect.y1);
        self.hline(x0, x1, y0, color);
        self.hline(x0, x1, y1, color);
        self.vline(x0, y0, y1, color);
        self.vline(x1, y0, y1, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba8) {
        let Some((mut x, mut y, x1, y1)) =
            self.clip_segment(quant(from.x), quant(from.y), quant(to.x), quant(to.y))
        else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl PresentSurface for CpuSurface {
    fn present(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
