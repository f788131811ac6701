/// Boundary color representation.
pub mod color;
/// Scene description boundary object.
pub mod model;
/// Round-robin fill palette.
pub mod palette;
