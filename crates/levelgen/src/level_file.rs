//! Textual level format shared with the runtime loader.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <level width="W" height="H">
//!     <layer name="ground">
//!         <row>..#~</row>
//!     </layer>
//!     <layer name="object">
//!         <row>.+?0</row>
//!     </layer>
//! </level>
//! ```
//!
//! Each layer carries exactly `height` rows of exactly `width` symbols, row 0
//! at the top. Loading fails outright on a missing file, a malformed header,
//! an absent layer, or a row of the wrong shape; there is no partial load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::level::LevelGrids;
use crate::types::{ObjectTile, TerrainTile};

pub const GROUND_LAYER: &str = "ground";
pub const OBJECT_LAYER: &str = "object";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<level\s+width="(\d+)"\s+height="(\d+)"\s*>"#).expect("header pattern is valid")
});
static LAYER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<layer\s+name="([^"]*)"\s*>(.*?)</layer>"#).expect("layer pattern is valid")
});
static ROW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<row>([^<]*)</row>").expect("row pattern is valid"));

#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error("cannot read level file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("level header with width and height is missing or malformed")]
    MissingHeader,
    #[error("layer `{0}` not found")]
    LayerNotFound(String),
    #[error("layer `{layer}` has {found} rows, expected {expected}")]
    RowCount { layer: String, found: usize, expected: usize },
    #[error("row {row} of layer `{layer}` has {found} cells, expected {expected}")]
    RowWidth { layer: String, row: usize, found: usize, expected: usize },
    #[error("unknown symbol `{symbol}` at row {row}, column {column} of layer `{layer}`")]
    UnknownSymbol { layer: String, row: usize, column: usize, symbol: char },
}

/// One layer as a plain character grid, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<char>,
}

impl LayerGrid {
    pub fn cell(&self, y: usize, x: usize) -> char {
        self.cells[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width.max(1)).map(|row| row.iter().collect())
    }

    pub fn from_terrain(grids: &LevelGrids) -> Self {
        Self {
            width: grids.width(),
            height: grids.height(),
            cells: grids.terrain().iter().map(|tile| tile.symbol()).collect(),
        }
    }

    pub fn from_objects(grids: &LevelGrids) -> Self {
        Self {
            width: grids.width(),
            height: grids.height(),
            cells: grids.objects().iter().map(|tile| tile.symbol()).collect(),
        }
    }
}

pub fn encode_level(grids: &LevelGrids) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<level width=\"{}\" height=\"{}\">\n", grids.width(), grids.height()));
    push_layer(&mut out, GROUND_LAYER, grids.height(), |y| {
        grids.terrain_row(y).iter().map(|tile| tile.symbol()).collect()
    });
    push_layer(&mut out, OBJECT_LAYER, grids.height(), |y| {
        grids.object_row(y).iter().map(|tile| tile.symbol()).collect()
    });
    out.push_str("</level>\n");
    out
}

fn push_layer(out: &mut String, name: &str, height: usize, row: impl Fn(usize) -> String) {
    out.push_str(&format!("    <layer name=\"{name}\">\n"));
    for y in 0..height {
        out.push_str(&format!("        <row>{}</row>\n", row(y)));
    }
    out.push_str("    </layer>\n");
}

/// Writes through a temporary sibling file so readers never see a partial level.
pub fn save_level(path: &Path, grids: &LevelGrids) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("xml.tmp");
    fs::write(&tmp_path, encode_level(grids))?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Like [`save_level`], but a failed write is only logged. The caller keeps
/// its in-memory level either way.
pub fn persist_level(path: &Path, grids: &LevelGrids) -> bool {
    match save_level(path, grids) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to persist generated level");
            false
        }
    }
}

pub fn decode_layer(text: &str, layer_name: &str) -> Result<LayerGrid, LevelLoadError> {
    let (width, height) = decode_dimensions(text)?;
    let body = LAYER_PATTERN
        .captures_iter(text)
        .find(|captures| &captures[1] == layer_name)
        .and_then(|captures| captures.get(2))
        .ok_or_else(|| LevelLoadError::LayerNotFound(layer_name.to_string()))?
        .as_str();

    let rows: Vec<&str> = ROW_PATTERN
        .captures_iter(body)
        .filter_map(|captures| captures.get(1).map(|row| row.as_str()))
        .collect();
    if rows.len() != height {
        return Err(LevelLoadError::RowCount {
            layer: layer_name.to_string(),
            found: rows.len(),
            expected: height,
        });
    }

    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(LevelLoadError::RowWidth {
                layer: layer_name.to_string(),
                row: y,
                found,
                expected: width,
            });
        }
        cells.extend(row.chars());
    }

    Ok(LayerGrid { width, height, cells })
}

pub fn decode_level(text: &str) -> Result<LevelGrids, LevelLoadError> {
    let ground = decode_layer(text, GROUND_LAYER)?;
    let objects = decode_layer(text, OBJECT_LAYER)?;
    let terrain = decode_symbols(&ground, GROUND_LAYER, TerrainTile::from_symbol)?;
    let objects = decode_symbols(&objects, OBJECT_LAYER, ObjectTile::from_symbol)?;
    Ok(LevelGrids::from_layers(ground.width, ground.height, terrain, objects))
}

pub fn load_layer(path: &Path, layer_name: &str) -> Result<LayerGrid, LevelLoadError> {
    decode_layer(&read_level_text(path)?, layer_name)
}

/// Reads both layers back into typed grids.
pub fn load_level(path: &Path) -> Result<LevelGrids, LevelLoadError> {
    decode_level(&read_level_text(path)?)
}

fn read_level_text(path: &Path) -> Result<String, LevelLoadError> {
    fs::read_to_string(path)
        .map_err(|source| LevelLoadError::Io { path: path.to_path_buf(), source })
}

fn decode_dimensions(text: &str) -> Result<(usize, usize), LevelLoadError> {
    let captures = HEADER_PATTERN.captures(text).ok_or(LevelLoadError::MissingHeader)?;
    let width = captures[1].parse().map_err(|_| LevelLoadError::MissingHeader)?;
    let height = captures[2].parse().map_err(|_| LevelLoadError::MissingHeader)?;
    Ok((width, height))
}

fn decode_symbols<T>(
    layer: &LayerGrid,
    layer_name: &str,
    decode: impl Fn(char) -> Option<T>,
) -> Result<Vec<T>, LevelLoadError> {
    layer
        .cells
        .iter()
        .enumerate()
        .map(|(index, &symbol)| {
            decode(symbol).ok_or_else(|| LevelLoadError::UnknownSymbol {
                layer: layer_name.to_string(),
                row: index / layer.width,
                column: index % layer.width,
                symbol,
            })
        })
        .collect()
}
