use crate::foundation::core::Rgba8;
use crate::foundation::error::{GnomonError, GnomonResult};
use crate::foundation::math::SplitMix64;

/// Fill colors assigned to sub-rectangles in carve order.
///
/// The cursor round-robins over the colors and is reset at the start of each
/// frame's subdivision pass, so a given carve step always receives the same
/// color.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgba8>,
    cursor: usize,
}

impl Palette {
    /// Generate `len` colors from `seed`.
    ///
    /// Channels are drawn from `1..=255`, never zero, so a generated fill
    /// cannot collide with a pure-black outline.
    pub fn from_seed(seed: u64, len: usize) -> GnomonResult<Self> {
        if len == 0 {
            return Err(GnomonError::validation("palette len must be > 0"));
        }
        let mut rng = SplitMix64::new(seed);
        let mut colors = Vec::with_capacity(len);
        for _ in 0..len {
            let r = (rng.next_u64() % 255) as u8 + 1;
            let g = (rng.next_u64() % 255) as u8 + 1;
            let b = (rng.next_u64() % 255) as u8 + 1;
            colors.push(Rgba8::opaque(r, g, b));
        }
        Ok(Self { colors, cursor: 0 })
    }

    /// Wrap an explicit color list.
    pub fn from_colors(colors: Vec<Rgba8>) -> GnomonResult<Self> {
        if colors.is_empty() {
            return Err(GnomonError::validation("palette must not be empty"));
        }
        Ok(Self { colors, cursor: 0 })
    }

    /// Number of colors in the cycle.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when the palette holds no colors.
    ///
    /// Never true for a constructed palette; both constructors reject empty
    /// color sets.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Return the cursor to the first color.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Next color in round-robin order.
    pub fn next_color(&mut self) -> Rgba8 {
        let c = self.colors[self.cursor];
        self.cursor = (self.cursor + 1) % self.colors.len();
        c
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
