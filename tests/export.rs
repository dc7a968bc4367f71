//! Validates TMX rendering, file export, and the batch runner end to end

use std::fs;
use std::path::Path;

use mazetiler::io::cli::{BatchRunner, Cli};
use mazetiler::io::configuration::MapConfig;
use mazetiler::io::tmx::{render_map, write_map};
use mazetiler::spatial::Grid;

const CONFIG: &str = r#"{
    "name": "cavern",
    "layer": "maze",
    "dimensions": 7,
    "dimensions_increment": 2,
    "amount": 3,
    "tile_set": "tiles.png",
    "tile_set_name": "cavern_tiles",
    "tile_width": 108,
    "tile_height": 108,
    "gid_default": 16,
    "gid_mapper": {
        "cross": 1,
        "horizontal_down": 2,
        "horizontal_up": 3,
        "vertical_left": 4,
        "vertical_right": 5,
        "bottom_left": 6,
        "bottom_right": 7,
        "up_left": 8,
        "up_right": 9,
        "horizontal": 10,
        "vertical": 11,
        "end_down": 12,
        "end_left": 13,
        "end_right": 14,
        "end_up": 15
    }
}"#;

fn config() -> MapConfig {
    match MapConfig::from_json_str(CONFIG) {
        Ok(config) => config,
        Err(error) => unreachable!("Config should parse: {error}"),
    }
}

fn sample_grid() -> Grid {
    let mut grid = Grid::new(5);
    grid.set(1, 1, 12);
    grid.set(1, 2, 10);
    grid.set(1, 3, 13);
    grid
}

#[test]
fn test_rendered_document_declares_the_map_shape() {
    let document = render_map(&sample_grid(), &config());

    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(document.contains("width=\"5\" height=\"5\""));
    assert!(document.contains("<layer name=\"maze\" width=\"5\" height=\"5\">"));
    assert!(document.contains("<tileset firstgid=\"1\" name=\"cavern_tiles\""));
    assert!(document.contains("tilecount=\"35\" columns=\"5\""));
    assert!(document.ends_with("</data>\n </layer>\n</map>\n"));
}

#[test]
fn test_tileset_image_size_is_derived_from_tile_geometry() {
    // 35 tiles in 5 columns is 7 rows of 108px tiles
    let document = render_map(&sample_grid(), &config());
    assert!(document.contains("<image source=\"tiles.png\" width=\"540\" height=\"756\"/>"));
}

#[test]
fn test_layer_csv_is_row_major_without_trailing_comma() {
    let document = render_map(&sample_grid(), &config());

    let Some(start) = document.find("<data encoding=\"csv\">") else {
        unreachable!("Document should contain a csv layer");
    };
    let Some(end) = document.find("</data>") else {
        unreachable!("Document should close the csv layer");
    };
    let Some(csv) = document.get(start + "<data encoding=\"csv\">".len()..end) else {
        unreachable!("Layer bounds should slice the document");
    };

    let cells: Vec<&str> = csv.split(',').collect();
    assert_eq!(cells.len(), 25);
    assert!(cells.iter().all(|cell| !cell.is_empty()));

    // Row 1 of the sample grid: wall, 12, 10, 13, wall
    assert_eq!(cells.get(5..10), Some(["0", "12", "10", "13", "0"].as_slice()));
}

#[test]
fn test_write_map_names_files_by_job_index() {
    let Ok(directory) = tempfile::tempdir() else {
        unreachable!("Temp directory creation failed");
    };

    let Ok(path) = write_map(&sample_grid(), &config(), directory.path(), 4) else {
        unreachable!("Export to a writable directory cannot fail");
    };

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("cavern_4.tmx")
    );
    assert!(path.exists());
}

#[test]
fn test_batch_runner_produces_every_map() {
    let Ok(directory) = tempfile::tempdir() else {
        unreachable!("Temp directory creation failed");
    };
    let config_path = directory.path().join("config.json");
    let output_dir = directory.path().join("maps");
    if fs::write(&config_path, CONFIG).is_err() {
        unreachable!("Writing the config fixture failed");
    }

    let cli = Cli {
        config: config_path,
        output: output_dir.clone(),
        seed: 42,
        sequential: false,
        quiet: true,
    };
    let mut runner = BatchRunner::new(cli);
    if let Err(error) = runner.run() {
        unreachable!("Batch run failed: {error}");
    }

    // Dimensions grow by the configured increment: 7, 9, 11
    for (job, dimension) in [(1, 7), (2, 9), (3, 11)] {
        let path = output_dir.join(format!("cavern_{job}.tmx"));
        assert!(path.exists(), "missing output for job {job}");
        assert_map_dimension(&path, dimension);
    }
}

#[test]
fn test_sequential_batch_matches_parallel_output() {
    let Ok(directory) = tempfile::tempdir() else {
        unreachable!("Temp directory creation failed");
    };
    let config_path = directory.path().join("config.json");
    if fs::write(&config_path, CONFIG).is_err() {
        unreachable!("Writing the config fixture failed");
    }

    let mut outputs = Vec::new();
    for (label, sequential) in [("par", false), ("seq", true)] {
        let output_dir = directory.path().join(label);
        let cli = Cli {
            config: config_path.clone(),
            output: output_dir.clone(),
            seed: 7,
            sequential,
            quiet: true,
        };
        if let Err(error) = BatchRunner::new(cli).run() {
            unreachable!("Batch run failed: {error}");
        }
        outputs.push(output_dir);
    }

    // Per-job seeding makes the two schedules byte-identical
    for job in 1..=3 {
        let name = format!("cavern_{job}.tmx");
        let read = |dir: &Path| match fs::read_to_string(dir.join(&name)) {
            Ok(content) => content,
            Err(error) => unreachable!("Reading {name} failed: {error}"),
        };
        assert_eq!(
            outputs.first().map(|dir| read(dir)),
            outputs.get(1).map(|dir| read(dir)),
            "schedules diverged for job {job}"
        );
    }
}

fn assert_map_dimension(path: &Path, dimension: usize) {
    let Ok(content) = fs::read_to_string(path) else {
        unreachable!("Reading {} failed", path.display());
    };
    assert!(
        content.contains(&format!("width=\"{dimension}\" height=\"{dimension}\"")),
        "{} does not declare dimension {dimension}",
        path.display()
    );
}
