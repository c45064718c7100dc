// src/fetch/mod.rs
// =============================================================================
// This module lists and downloads keymaps.
//
// Submodules:
// - source: where the keymaps live (a GitHub repository or a local checkout)
// - github: the HTTP client for the GitHub contents API
// - local: directory listing for local checkouts
// - download: README lookup and saving a file to disk
//
// Both kinds of source produce the same DirectoryEntry type. An entry may
// carry a Locator telling us where its bytes live; the download code
// matches on that instead of assuming everything is a URL.
// =============================================================================

mod download;
mod github;
mod local;
mod source;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

pub use download::{default_download_dir, find_entry, find_readme, Fetcher};
pub use source::Source;

/// One item in a keymap directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    /// Where the content can be read from; None for things like sub-directories
    pub locator: Option<Locator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// A `download_url` reported by the GitHub API
    Remote(Url),
    /// Absolute path of a file in a local checkout
    Local(PathBuf),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid local directory URL: {0}")]
    InvalidLocalUrl(String),

    #[error("Invalid GitHub repository '{0}' (expected USERNAME/REPOSITORY)")]
    InvalidRepository(String),

    #[error("Cannot build a contents URL from API base {0}")]
    InvalidApiBase(Url),

    #[error("GITHUB_TOKEN contains characters that are not allowed in a header")]
    InvalidToken,

    #[error("Failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Error reading local directory {}", .path.display())]
    LocalDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Request to {url} failed")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with HTTP {status}: {message}")]
    Status { url: Url, status: u16, message: String },

    #[error("Failed to parse directory listing from {url}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid file name.")]
    InvalidFileName,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0} cannot be downloaded (no download URL)")]
    NotDownloadable(String),

    #[error("Could not determine the default download directory")]
    NoDownloadDir,

    #[error("Error reading file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
