//! Input/output operations: configuration, export, and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Configuration schema and generation defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// Batch progress display
pub mod progress;
/// Tiled TMX document rendering and export
pub mod tmx;
