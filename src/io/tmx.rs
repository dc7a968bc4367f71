//! Tiled TMX document rendering and file export
//!
//! Produces the minimal TMX shape the original tooling emitted: one orthogonal
//! map, one tileset reference, one CSV-encoded tile layer holding the row-major
//! flattened grid. Map width and height are the maze dimension; tileset pixel
//! size is derived from the configured tile geometry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::MapConfig;
use crate::io::error::{MazeError, Result};
use crate::spatial::Grid;

/// Render `grid` as a complete TMX document string
pub fn render_map(grid: &Grid, config: &MapConfig) -> String {
    let mut document = header(grid.dimension(), config);
    document.push_str(&layer_csv(grid));
    document.push_str(TAIL);
    document
}

/// Write `grid` into `directory` as `<name>_<job>.tmx`
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] when the file cannot be written.
pub fn write_map(grid: &Grid, config: &MapConfig, directory: &Path, job: usize) -> Result<PathBuf> {
    let path = directory.join(format!("{}_{job}.tmx", config.name));

    fs::write(&path, render_map(grid, config)).map_err(|source| MazeError::FileSystem {
        path: path.clone(),
        operation: "write",
        source,
    })?;

    Ok(path)
}

/// Row-major CSV encoding of the grid, without a trailing comma
fn layer_csv(grid: &Grid) -> String {
    let values: Vec<String> = grid.values().map(|value| value.to_string()).collect();
    values.join(",")
}

fn header(dimension: usize, config: &MapConfig) -> String {
    let tile_width = config.tile_width;
    let tile_height = config.tile_height;
    let tile_count = config.tile_count;
    let tile_columns = config.tile_columns;
    let tile_set = &config.tile_set;
    let tile_set_name = &config.tile_set_name;
    let layer = &config.layer;

    let tile_rows = tile_count.div_ceil(tile_columns);
    let image_width = tile_columns * tile_width;
    let image_height = tile_rows * tile_height;

    let mut document = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    document.push_str(&format!(
        "<map version=\"1.0\" tiledversion=\"1.0.2\" orientation=\"orthogonal\" \
         renderorder=\"right-down\" width=\"{dimension}\" height=\"{dimension}\" \
         tilewidth=\"{tile_width}\" tileheight=\"{tile_height}\" nextobjectid=\"1\">\n"
    ));
    document.push_str(&format!(
        " <tileset firstgid=\"1\" name=\"{tile_set_name}\" tilewidth=\"{tile_width}\" \
         tileheight=\"{tile_height}\" tilecount=\"{tile_count}\" columns=\"{tile_columns}\">\n"
    ));
    document.push_str(&format!(
        "  <image source=\"{tile_set}\" width=\"{image_width}\" height=\"{image_height}\"/>\n"
    ));
    document.push_str(" </tileset>\n");
    document.push_str(&format!(
        " <layer name=\"{layer}\" width=\"{dimension}\" height=\"{dimension}\">\n"
    ));
    document.push_str("  <data encoding=\"csv\">");
    document
}

const TAIL: &str = "</data>\n </layer>\n</map>\n";
