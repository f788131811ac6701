use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn seeded_palette_is_deterministic() {
    let mut a = Palette::from_seed(42, 20).unwrap();
    let mut b = Palette::from_seed(42, 20).unwrap();
    for _ in 0..40 {
        assert_eq!(a.next_color(), b.next_color());
    }
}

#[test]
fn seeded_channels_are_never_zero() {
    let mut p = Palette::from_seed(7, 64).unwrap();
    for _ in 0..64 {
        let c = p.next_color();
        assert!(c.r >= 1 && c.g >= 1 && c.b >= 1);
        assert_eq!(c.a, 255);
    }
}

#[test]
fn cursor_wraps_and_resets() {
    let mut p = Palette::from_colors(vec![Rgba8::opaque(10, 0, 0), Rgba8::opaque(0, 10, 0)])
        .unwrap();
    let first = p.next_color();
    let second = p.next_color();
    assert_ne!(first, second);
    // Wrapped around.
    assert_eq!(p.next_color(), first);
    p.next_color();
    p.reset();
    assert_eq!(p.next_color(), first);
}

#[test]
fn empty_palettes_are_rejected() {
    assert!(Palette::from_colors(Vec::new()).is_err());
    assert!(Palette::from_seed(0, 0).is_err());
}

#[test]
fn different_seeds_give_different_palettes() {
    let mut a = Palette::from_seed(1, 8).unwrap();
    let mut b = Palette::from_seed(2, 8).unwrap();
    let diff = (0..8).filter(|_| a.next_color() != b.next_color()).count();
    assert!(diff > 0);
}
