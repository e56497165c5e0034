/// Layer set construction from configured names
pub mod builder;
/// Fragment display names
pub mod naming;
/// Rarity rules and classification
pub mod rarity;
/// Directory scanning into fragments
pub mod scanner;

pub use builder::{Layer, Position, build_layers};
pub use scanner::{Fragment, scan_layer};
