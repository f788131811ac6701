/// Logarithmic spiral tracing through a pivot sequence.
pub mod spiral;
/// Whirling-squares dissection of a golden rectangle.
pub mod subdivide;

/// The golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_894_8;

/// Termination threshold shared by the dissection and the spiral trace.
///
/// A rectangle side or a spiral radius below this many viewport units is
/// degenerate and stops the construction.
pub const MIN_EXTENT: f64 = 0.1;
