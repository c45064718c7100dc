// src/fetch/local.rs
// =============================================================================
// Lists a keymap directory from a local checkout of the keymaps repository.
//
// Every child of the directory becomes a DirectoryEntry whose locator is its
// absolute path. Entries are sorted by name because read_dir order is
// platform-dependent.
// =============================================================================

use std::path::Path;

use tokio::fs;
use tracing::debug;

use super::{DirectoryEntry, FetchError, Locator};

pub async fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>, FetchError> {
    let to_error = |source| FetchError::LocalDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut reader = fs::read_dir(dir).await.map_err(to_error)?;
    let mut entries = Vec::new();

    while let Some(child) = reader.next_entry().await.map_err(to_error)? {
        entries.push(DirectoryEntry {
            name: child.file_name().to_string_lossy().into_owned(),
            locator: Some(Locator::Local(child.path())),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = %dir.display(), count = entries.len(), "listed local directory");
    Ok(entries)
}
