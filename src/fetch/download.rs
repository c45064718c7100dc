// src/fetch/download.rs
// =============================================================================
// Reading entry contents and saving them to disk.
//
// Fetcher ties the two kinds of source together:
//   - list():      GitHub contents API or local read_dir
//   - read_text(): README contents (HTTP GET or local file read)
//   - download():  copy one entry into a destination directory
//
// Nothing here prompts the user; main.rs asks for the file name and the
// destination and hands them in.
// =============================================================================

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use super::github::GitHubClient;
use super::local::list_directory;
use super::{DirectoryEntry, FetchError, Locator, Source};
use crate::config::FetchConfig;

const README_NAME: &str = "readme.md";

/// PlayCover's keymapping folder, relative to the home directory (macOS)
const PLAYCOVER_KEYMAPPING: &str = "Library/Containers/io.playcover.PlayCover/Keymapping";

pub struct Fetcher {
    github: GitHubClient,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            github: GitHubClient::new(config)?,
        })
    }

    /// Lists the entries of `bundle_id` in `source`
    pub async fn list(&self, source: &Source, bundle_id: &str) -> Result<Vec<DirectoryEntry>, FetchError> {
        if let Some(dir) = source.local_dir(bundle_id) {
            return list_directory(&dir).await;
        }

        match source.contents_url(self.github.api_base(), bundle_id)? {
            Some(url) => self.github.list_contents(&url).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn read_bytes(&self, entry: &DirectoryEntry) -> Result<Vec<u8>, FetchError> {
        match &entry.locator {
            Some(Locator::Remote(url)) => self.github.fetch_bytes(url).await,
            Some(Locator::Local(path)) => fs::read(path).await.map_err(|source| FetchError::ReadFile {
                path: path.clone(),
                source,
            }),
            None => Err(FetchError::NotDownloadable(entry.name.clone())),
        }
    }

    pub async fn read_text(&self, entry: &DirectoryEntry) -> Result<String, FetchError> {
        match &entry.locator {
            Some(Locator::Remote(url)) => self.github.fetch_text(url).await,
            _ => {
                let bytes = self.read_bytes(entry).await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    /// Saves `entry` as `dest_dir/<entry name>` and returns that path.
    ///
    /// The destination directory is created when missing.
    pub async fn download(&self, entry: &DirectoryEntry, dest_dir: &Path) -> Result<PathBuf, FetchError> {
        let bytes = self.read_bytes(entry).await?;
        let destination = dest_dir.join(&entry.name);

        let write_error = |source| FetchError::WriteFile {
            path: destination.clone(),
            source,
        };
        fs::create_dir_all(dest_dir).await.map_err(write_error)?;
        fs::write(&destination, &bytes).await.map_err(write_error)?;

        info!(path = %destination.display(), bytes = bytes.len(), "downloaded keymap");
        Ok(destination)
    }
}

/// First entry named README.md (any case) that has readable content
pub fn find_readme(entries: &[DirectoryEntry]) -> Option<&DirectoryEntry> {
    entries
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(README_NAME) && e.locator.is_some())
}

/// Looks up the entry to download by its exact name.
/// A blank name is rejected; any other name is matched as given.
pub fn find_entry<'a>(entries: &'a [DirectoryEntry], file_name: &str) -> Result<&'a DirectoryEntry, FetchError> {
    if file_name.trim().is_empty() {
        return Err(FetchError::InvalidFileName);
    }

    entries
        .iter()
        .find(|e| e.name == file_name)
        .ok_or_else(|| FetchError::FileNotFound(file_name.to_string()))
}

/// Where PlayCover looks for keymaps.
///
/// macOS: ~/Library/Containers/io.playcover.PlayCover/Keymapping
/// elsewhere: <data dir>/io.playcover.PlayCover/Keymapping
pub fn default_download_dir() -> Result<PathBuf, FetchError> {
    if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|home| home.join(PLAYCOVER_KEYMAPPING))
            .ok_or(FetchError::NoDownloadDir)
    } else {
        dirs::data_dir()
            .map(|data| data.join("io.playcover.PlayCover").join("Keymapping"))
            .ok_or(FetchError::NoDownloadDir)
    }
}
