/// Per-edition selection state and metadata records
pub mod accumulator;
/// Random fragment selection and edition drawing
pub mod compositor;
/// Metadata collection and JSON persistence
pub mod metadata;

pub use accumulator::{Attribute, DecodedEntry, EditionAccumulator, EditionMetadata};
pub use compositor::{EditionCompositor, select_fragment};
pub use metadata::MetadataRecorder;
