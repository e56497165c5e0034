//! Per-edition selection tracking

use crate::layers::{Fragment, Layer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fragment chosen for one layer of one edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Fragment id within its layer
    pub id: usize,
    /// Layer name
    pub layer: String,
    /// Fragment display name
    pub name: String,
    /// Fragment rarity label, omitted when the fragment has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

/// One `{layerId: fragmentId}` pair of the decoded hash
///
/// Serialized as a single-key JSON object, e.g. `{"0":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<String, usize>",
    try_from = "BTreeMap<String, usize>"
)]
pub struct DecodedEntry {
    /// Layer id
    pub layer_id: usize,
    /// Fragment id within that layer
    pub fragment_id: usize,
}

impl From<DecodedEntry> for BTreeMap<String, usize> {
    fn from(entry: DecodedEntry) -> Self {
        Self::from([(entry.layer_id.to_string(), entry.fragment_id)])
    }
}

impl TryFrom<BTreeMap<String, usize>> for DecodedEntry {
    type Error = String;

    fn try_from(map: BTreeMap<String, usize>) -> Result<Self, Self::Error> {
        let mut entries = map.into_iter();
        match (entries.next(), entries.next()) {
            (Some((key, fragment_id)), None) => {
                let layer_id = key
                    .parse()
                    .map_err(|err| format!("layer id '{key}' is not an integer: {err}"))?;
                Ok(Self {
                    layer_id,
                    fragment_id,
                })
            }
            _ => Err("decoded hash entries hold exactly one layer".to_string()),
        }
    }
}

/// A finished edition's provenance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionMetadata {
    /// Layer and fragment ids concatenated in layer order
    pub hash: String,
    /// The same pairs as `hash`, one entry per layer
    pub decoded_hash: Vec<DecodedEntry>,
    /// 1-based edition number
    pub edition: u32,
    /// Milliseconds since the Unix epoch when the record was finalized
    pub date: u64,
    /// One attribute per layer, in layer order
    pub attributes: Vec<Attribute>,
}

/// Selections made while compositing a single edition
///
/// Each edition starts from an empty accumulator and consumes it into an
/// [`EditionMetadata`] record once every layer has been drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionAccumulator {
    attributes: Vec<Attribute>,
    hash: Vec<usize>,
    decoded_hash: Vec<DecodedEntry>,
}

impl EditionAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
            hash: Vec::new(),
            decoded_hash: Vec::new(),
        }
    }

    /// Record the fragment drawn for a layer
    pub fn record(&mut self, layer: &Layer, fragment: &Fragment) {
        self.attributes.push(Attribute {
            id: fragment.id,
            layer: layer.name.clone(),
            name: fragment.name.clone(),
            rarity: fragment.rarity.clone(),
        });
        self.hash.push(layer.id);
        self.hash.push(fragment.id);
        self.decoded_hash.push(DecodedEntry {
            layer_id: layer.id,
            fragment_id: fragment.id,
        });
    }

    /// Number of layers recorded so far
    pub const fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether nothing has been recorded yet
    pub const fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes recorded so far
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Encoded hash of the selections so far
    pub fn hash(&self) -> String {
        self.hash.iter().map(ToString::to_string).collect()
    }

    /// Finalize into a metadata record
    pub fn into_metadata(self, edition: u32, date: u64) -> EditionMetadata {
        EditionMetadata {
            hash: self.hash(),
            decoded_hash: self.decoded_hash,
            edition,
            date,
            attributes: self.attributes,
        }
    }
}
