// src/layout/mod.rs
// =============================================================================
// This module converts playmap files between keyboard layouts.
//
// Submodules:
// - mappings: the Layout enum and the key-code tables
// - remap: the text substitution over <integer>N</integer> fields
//
// This file owns the file-level operation: check the paths, read, remap,
// write. Unlike the tool this replaces, a failed write is reported instead
// of being silently dropped.
// =============================================================================

mod mappings;
mod remap;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use mappings::Layout;
pub use remap::modify_layout;

/// Extension every playmap file must carry
pub const PLAYMAP_EXTENSION: &str = ".playmap";

/// Which side of the conversion a path belongs to (used in messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Output,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Input => f.write_str("input"),
            FileRole::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("The {0} file must have a .playmap extension.")]
    MissingExtension(FileRole),

    #[error("Failed to read input file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Checks that `path` ends in `.playmap` (case-sensitive, like the file format itself)
pub fn validate_playmap_path(path: &Path, role: FileRole) -> Result<(), LayoutError> {
    if path.to_string_lossy().ends_with(PLAYMAP_EXTENSION) {
        Ok(())
    } else {
        Err(LayoutError::MissingExtension(role))
    }
}

/// Reads `input`, converts it from `from` to `to` and writes it to `output`.
///
/// Both paths are validated before any file is touched. An existing output
/// file is overwritten.
pub fn convert_file(input: &Path, output: &Path, from: Layout, to: Layout) -> Result<(), LayoutError> {
    validate_playmap_path(input, FileRole::Input)?;
    validate_playmap_path(output, FileRole::Output)?;

    let content = fs::read_to_string(input).map_err(|source| LayoutError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = content.len(), "read playmap");

    let converted = modify_layout(&content, from, to);

    fs::write(output, converted).map_err(|source| LayoutError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), "wrote playmap");

    Ok(())
}
