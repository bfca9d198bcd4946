//! Export filename derivation.
//!
//! The display name is the uploaded filename with its extension
//! stripped; forbidden filesystem characters are replaced with `-` and
//! a per-variant suffix is appended for download.

use serde::{Deserialize, Serialize};

/// Characters replaced with `-` to keep names filesystem-safe.
const FORBIDDEN: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// The three export variants and their filename suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportVariant {
    /// Unmasked square crop.
    Square,
    /// Circle-masked crop.
    Circle,
    /// Rounded-corner crop.
    Rounded,
}

impl ExportVariant {
    /// Filename suffix for this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            ExportVariant::Square => "square",
            ExportVariant::Circle => "circle",
            ExportVariant::Rounded => "rounded",
        }
    }

    /// Full download filename: `<sanitized-base>-<suffix>.png`.
    pub fn filename(self, base_name: &str) -> String {
        format!("{}-{}.png", sanitize_filename(base_name), self.suffix())
    }
}

/// Replace forbidden characters with `-`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN.contains(&c) { '-' } else { c })
        .collect()
}

/// Strip the final extension from a filename.
///
/// Only a trailing non-empty `.ext` with no path separator inside it
/// counts; a name like `archive.tar.gz` loses only `.gz`. A dotfile
/// name (`.hidden`) strips to the empty string, which the compositor
/// replaces with its default display name.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => {
            let ext = &file_name[idx + 1..];
            if !ext.is_empty() && !ext.contains('/') {
                &file_name[..idx]
            } else {
                file_name
            }
        }
        None => file_name,
    }
}
