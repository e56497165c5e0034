//! Layered generative art assembly
//!
//! Fragments are scanned from one directory per layer, one fragment per layer
//! is picked at random for every edition, and the stacked result is written
//! as a PNG next to a JSON document recording each edition's selections,
//! rarity labels, and positional hash.

#![forbid(unsafe_code)]

/// Edition composition and metadata recording
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Layer model, directory scanning, and rarity rules
pub mod layers;

pub use io::error::{GenerationError, Result};
