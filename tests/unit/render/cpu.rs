use super::*;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::render::surface::{DrawSurface, FrameRGBA, PresentSurface};

fn surface_8x8() -> CpuSurface {
    CpuSurface::new(Canvas {
        width: 8,
        height: 8,
    })
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[idx],
        frame.data[idx + 1],
        frame.data[idx + 2],
        frame.data[idx + 3],
    ]
}

#[test]
fn clear_floods_every_pixel() {
    let mut s = surface_8x8();
    let red = Rgba8::opaque(255, 0, 0);
    s.clear(red);
    let frame = s.present();
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, red.to_array());
    }
}

#[test]
fn fill_rect_clamps_to_the_surface() {
    let mut s = surface_8x8();
    let c = Rgba8::opaque(9, 9, 9);
    s.fill_rect(Rect::new(-4.0, -4.0, 4.0, 4.0), c);
    let frame = s.present();
    assert_eq!(pixel(&frame, 0, 0), c.to_array());
    assert_eq!(pixel(&frame, 3, 3), c.to_array());
    assert_eq!(pixel(&frame, 4, 4), [0, 0, 0, 0]);
}

#[test]
fn fill_rect_covers_the_half_open_span() {
    let mut s = surface_8x8();
    let c = Rgba8::opaque(5, 5, 5);
    s.fill_rect(Rect::new(2.0, 2.0, 5.0, 5.0), c);
    let frame = s.present();
    assert_eq!(pixel(&frame, 2, 2), c.to_array());
    assert_eq!(pixel(&frame, 4, 4), c.to_array());
    assert_eq!(pixel(&frame, 5, 5), [0, 0, 0, 0]);
}

#[test]
fn stroke_rect_paints_the_border_only() {
    let mut s = surface_8x8();
    let c = Rgba8::opaque(1, 2, 3);
    s.stroke_rect(Rect::new(1.0, 1.0, 6.0, 6.0), c);
    let frame = s.present();
    for corner in [(1, 1), (6, 1), (1, 6), (6, 6)] {
        assert_eq!(pixel(&frame, corner.0, corner.1), c.to_array());
    }
    assert_eq!(pixel(&frame, 3, 1), c.to_array());
    assert_eq!(pixel(&frame, 1, 3), c.to_array());
    assert_eq!(pixel(&frame, 3, 3), [0, 0, 0, 0]);
}

#[test]
fn stroke_line_covers_both_endpoints() {
    let mut s = surface_8x8();
    let c = Rgba8::opaque(7, 7, 7);
    s.stroke_line(Point::new(0.0, 0.0), Point::new(7.0, 7.0), c);
    let frame = s.present();
    assert_eq!(pixel(&frame, 0, 0), c.to_array());
    assert_eq!(pixel(&frame, 7, 7), c.to_array());
    assert_eq!(pixel(&frame, 3, 3), c.to_array());
}

#[test]
fn crossing_lines_are_clipped_not_dropped() {
    let mut s = surface_8x8();
    let c = Rgba8::opaque(7, 7, 7);
    // Horizontal line entering from far left, leaving far right.
    s.stroke_line(Point::new(-100.0, 4.0), Point::new(100.0, 4.0), c);
    let frame = s.present();
    for x in 0..8 {
        assert_eq!(pixel(&frame, x, 4), c.to_array());
    }
}

#[test]
fn off_surface_lines_are_a_no_op() {
    let mut s = surface_8x8();
    s.stroke_line(
        Point::new(-100.0, -50.0),
        Point::new(-10.0, -5.0),
        Rgba8::opaque(255, 255, 255),
    );
    let frame = s.present();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn zero_sized_surface_accepts_all_operations() {
    let mut s = CpuSurface::new(Canvas {
        width: 0,
        height: 0,
    });
    s.clear(Rgba8::opaque(1, 1, 1));
    s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba8::opaque(1, 1, 1));
    s.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba8::opaque(1, 1, 1));
    s.stroke_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), Rgba8::opaque(1, 1, 1));
    assert!(s.present().data.is_empty());
}

#[test]
fn present_reports_dimensions() {
    let s = CpuSurface::new(Canvas {
        width: 5,
        height: 3,
    });
    let frame = s.present();
    assert_eq!((frame.width, frame.height), (5, 3));
    assert_eq!(frame.data.len(), 5 * 3 * 4);
}
