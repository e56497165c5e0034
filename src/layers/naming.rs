//! Display names for fragments

use crate::io::configuration::FILE_EXTENSION_LEN;
use crate::io::error::{GenerationError, Result};
use crate::layers::rarity::RarityRule;

/// Strip the extension and rarity markers from a fragment file name
///
/// The last [`FILE_EXTENSION_LEN`] characters are dropped, then the first
/// occurrence of each marker is removed in rule order.
///
/// # Errors
///
/// Returns an error if the file name is shorter than the extension it is
/// expected to carry
pub fn display_name(file_name: &str, rules: &[RarityRule]) -> Result<String> {
    let char_count = file_name.chars().count();
    if char_count < FILE_EXTENSION_LEN {
        return Err(GenerationError::InvalidFragmentName {
            file_name: file_name.to_string(),
            reason: "name is shorter than its file extension",
        });
    }

    // Counting chars keeps the cut on a UTF-8 boundary
    let stem_end = file_name
        .char_indices()
        .nth(char_count - FILE_EXTENSION_LEN)
        .map_or(file_name.len(), |(index, _)| index);
    let mut name = file_name.get(..stem_end).unwrap_or_default().to_string();

    for rule in rules {
        name = name.replacen(rule.key.as_str(), "", 1);
    }

    Ok(name)
}
