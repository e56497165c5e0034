//! Layer directory scanning into ordered fragment lists

use crate::io::error::{GenerationError, Result, WithPath};
use crate::layers::naming::display_name;
use crate::layers::rarity::RarityTable;
use std::path::Path;

/// One selectable image inside a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 1-based position in the sorted directory listing
    pub id: usize,
    /// Name with extension and rarity markers removed
    pub name: String,
    /// File name as found on disk
    pub file_name: String,
    /// Rarity label derived from the file name
    pub rarity: Option<String>,
}

/// Whether a directory entry is a dotfile and must be skipped
///
/// Matches a leading `.` followed by anything other than `.` or `/`.
pub fn is_hidden(entry_name: &str) -> bool {
    let mut chars = entry_name.chars();
    chars.next() == Some('.') && chars.next().is_some_and(|c| c != '.' && c != '/')
}

/// List a layer directory and describe every visible entry as a fragment
///
/// Entries are sorted by name so ids are stable across platforms.
///
/// # Errors
///
/// Returns an error if:
/// - The directory is missing or cannot be read
/// - A visible entry name is not valid UTF-8
/// - An entry name is too short to carry a file extension
pub fn scan_layer(dir: &Path, rarity: &RarityTable) -> Result<Vec<Fragment>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read layer directory")? {
        let entry = entry.with_path(dir, "read layer directory entry")?;
        let raw = entry.file_name();
        if is_hidden(&raw.to_string_lossy()) {
            continue;
        }
        let name = raw
            .into_string()
            .map_err(|raw| GenerationError::InvalidFragmentName {
                file_name: raw.to_string_lossy().into_owned(),
                reason: "name is not valid UTF-8",
            })?;
        names.push(name);
    }
    names.sort_unstable();

    names
        .into_iter()
        .enumerate()
        .map(|(index, file_name)| {
            Ok(Fragment {
                id: index + 1,
                name: display_name(&file_name, rarity.rules())?,
                rarity: rarity.classify(&file_name).map(str::to_string),
                file_name,
            })
        })
        .collect()
}
