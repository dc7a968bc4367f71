//! Command-line interface and batch orchestration for maze generation
//!
//! One run covers one batch: the config file says how many mazes to build and how
//! their sizes progress, and every job (carve, optionally classify, export) owns
//! its grid, stack, and random stream outright. That makes jobs free to run on
//! parallel threads with no shared state beyond the read-only config.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use clap::Parser;

use crate::algorithm::carver::MazeCarver;
use crate::algorithm::classifier::classify;
use crate::io::configuration::{DEFAULT_SEED, MapConfig};
use crate::io::error::{MazeError, Result};
use crate::io::progress::ProgressManager;
use crate::io::tmx::write_map;
use crate::spatial::coords::Logical;

#[derive(Parser)]
#[command(name = "mazetiler")]
#[command(
    author,
    version,
    about = "Generate perfect mazes and export them as Tiled TMX maps"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// JSON configuration file describing the batch
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Directory to write the generated .tmx files into
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Base random seed; each maze derives an independent stream from it
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generate mazes one at a time instead of on parallel threads
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives a batch of generation jobs from config to exported TMX files
pub struct BatchRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Run the full batch described by the config file
    ///
    /// # Errors
    ///
    /// Returns configuration errors from loading, file system errors from
    /// creating the output directory or writing maps, and the first job error
    /// encountered (remaining jobs still run to completion before returning).
    pub fn run(&mut self) -> Result<()> {
        let config = MapConfig::from_json_path(&self.cli.config)?;

        fs::create_dir_all(&self.cli.output).map_err(|source| MazeError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source,
        })?;

        if self.cli.should_show_progress() {
            self.progress = Some(ProgressManager::new(config.amount));
        }

        let outcome = if self.cli.sequential {
            self.run_sequential(&config)
        } else {
            self.run_parallel(&config)
        };

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        outcome
    }

    fn run_sequential(&self, config: &MapConfig) -> Result<()> {
        for job in 1..=config.amount {
            let path = run_job(config, &self.cli.output, self.cli.seed, job)?;
            self.report_completion(&path);
        }
        Ok(())
    }

    fn run_parallel(&self, config: &MapConfig) -> Result<()> {
        let output = self.cli.output.as_path();
        let seed = self.cli.seed;

        thread::scope(|scope| {
            let handles: Vec<_> = (1..=config.amount)
                .map(|job| (job, scope.spawn(move || run_job(config, output, seed, job))))
                .collect();

            let mut first_error = None;
            for (job, handle) in handles {
                match handle.join() {
                    Ok(Ok(path)) => self.report_completion(&path),
                    Ok(Err(error)) => {
                        first_error.get_or_insert(error);
                    }
                    Err(payload) => {
                        first_error.get_or_insert(MazeError::JobFailed {
                            job,
                            reason: panic_reason(payload.as_ref()),
                        });
                    }
                }
            }

            first_error.map_or(Ok(()), Err)
        })
    }

    fn report_completion(&self, path: &Path) {
        if let Some(progress) = &self.progress {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            progress.complete_job(&name);
        }
    }
}

/// Generate, classify, and export one maze
///
/// Each job seeds its own RNG from the base seed and its batch index, so
/// concurrent jobs draw from independent streams and a fixed base seed
/// reproduces the whole batch.
fn run_job(config: &MapConfig, output: &Path, base_seed: u64, job: usize) -> Result<PathBuf> {
    let mut carver = MazeCarver::new(config.dimension_for_job(job), base_seed + job as u64)?;
    let maze = carver.generate(Logical { row: 0, col: 0 }, config.gid_default)?;

    let grid = match &config.gid_mapper {
        Some(table) => classify(&maze, table)?,
        None => maze,
    };

    write_map(&grid, config, output, job)
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown panic".to_owned())
        },
        |message| (*message).to_owned(),
    )
}
