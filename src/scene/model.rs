use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{GnomonError, GnomonResult};
use crate::scene::color::ColorDef;
use crate::scene::palette::Palette;

/// Scene description boundary object.
///
/// The JSON-facing, human-edited description of one spiral scene. Every field
/// is defaulted, so `{}` — or no scene file at all — is a valid scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDef {
    /// Output canvas in pixels.
    pub canvas: Canvas,
    /// Seed for the generated palette (ignored for explicit palettes).
    pub seed: u64,
    /// Fill colors cycled across sub-rectangles.
    pub palette: PaletteDef,
    /// Color the surface is cleared to at the start of every frame.
    pub background: ColorDef,
    /// Sub-rectangle border color.
    pub outline: ColorDef,
    /// Spiral polyline color.
    pub spiral: ColorDef,
}

impl Default for SceneDef {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1280,
                height: 800,
            },
            seed: 0,
            palette: PaletteDef::default(),
            background: ColorDef::rgba(1.0, 1.0, 1.0, 1.0),
            outline: ColorDef::rgba(0.0, 0.0, 0.0, 1.0),
            spiral: ColorDef::rgba(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl SceneDef {
    /// Parse a scene from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> GnomonResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| GnomonError::validation(format!("parse scene JSON: {e}")))?;
        def.validate()?;
        Ok(def)
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GnomonResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GnomonError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the scene.
    pub fn validate(&self) -> GnomonResult<()> {
        match &self.palette {
            PaletteDef::Seeded { len: 0 } => {
                Err(GnomonError::validation("palette len must be > 0"))
            }
            PaletteDef::Colors(colors) if colors.is_empty() => Err(GnomonError::validation(
                "explicit palette must not be empty",
            )),
            _ => Ok(()),
        }
    }

    /// Build the palette this scene describes.
    pub fn build_palette(&self) -> GnomonResult<Palette> {
        match &self.palette {
            PaletteDef::Seeded { len } => Palette::from_seed(self.seed, *len),
            PaletteDef::Colors(colors) => {
                Palette::from_colors(colors.iter().map(|c| c.to_rgba8()).collect())
            }
        }
    }
}

/// Palette description: a seeded length or an explicit color list.
///
/// JSON shorthands: `{"len": 12}` generates 12 seeded colors;
/// `["#ff0000", "#00ff00"]` lists them explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteDef {
    /// Generate `len` colors from the scene seed.
    Seeded {
        /// Number of generated colors.
        len: usize,
    },
    /// Explicit fill colors, cycled in order.
    Colors(Vec<ColorDef>),
}

impl Default for PaletteDef {
    fn default() -> Self {
        Self::Seeded { len: 20 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
