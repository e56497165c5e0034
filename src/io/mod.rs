/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and configuration file loading
pub mod configuration;
/// Error types
pub mod error;
/// Fragment loading and canvas export
pub mod image;
/// Edition progress display
pub mod progress;
/// Working directory layout and build lifecycle
pub mod workspace;
