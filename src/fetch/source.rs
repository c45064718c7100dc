// src/fetch/source.rs
// =============================================================================
// Resolves the --source option into a place to list keymaps from.
//
// Accepted forms:
//   - absent                 -> the default repository (PlayCover/keymaps)
//   - owner/repo             -> that GitHub repository
//   - file:///path/to/dir    -> a local directory
//
// For local sources the bundle ID is joined onto the directory path, so
// file:///repo/keymapping and file:///repo/keymapping/ behave the same.
// =============================================================================

use std::fmt;
use std::path::PathBuf;

use url::Url;

use super::FetchError;

const FILE_SCHEME_PREFIX: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    GitHub { owner: String, repo: String },
    Local(PathBuf),
}

impl Source {
    pub fn resolve(source: Option<&str>, default_repo: &str) -> Result<Self, FetchError> {
        match source {
            Some(s) if s.starts_with(FILE_SCHEME_PREFIX) => Self::parse_local(s),
            Some(s) => Self::parse_repository(s),
            None => Self::parse_repository(default_repo),
        }
    }

    fn parse_local(s: &str) -> Result<Self, FetchError> {
        let url = Url::parse(s).map_err(|_| FetchError::InvalidLocalUrl(s.to_string()))?;
        let path = url
            .to_file_path()
            .map_err(|()| FetchError::InvalidLocalUrl(s.to_string()))?;
        Ok(Source::Local(path))
    }

    // Example: "PlayCover/keymaps" -> GitHub { owner: "PlayCover", repo: "keymaps" }
    fn parse_repository(s: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidRepository(s.to_string());

        let (owner, repo) = s.trim().split_once('/').ok_or_else(invalid)?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        let valid_part = |part: &str| !part.is_empty() && !part.contains(['/', ' ', '\t', '\n']);
        if !valid_part(owner) || !valid_part(repo) {
            return Err(invalid());
        }

        Ok(Source::GitHub {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Directory of a local source for the given bundle
    pub fn local_dir(&self, bundle_id: &str) -> Option<PathBuf> {
        match self {
            Source::Local(root) if bundle_id.is_empty() => Some(root.clone()),
            Source::Local(root) => Some(root.join(bundle_id)),
            Source::GitHub { .. } => None,
        }
    }

    /// `{api_base}/repos/{owner}/{repo}/contents/keymapping/{bundle_id}`
    pub fn contents_url(&self, api_base: &Url, bundle_id: &str) -> Result<Option<Url>, FetchError> {
        let Source::GitHub { owner, repo } = self else {
            return Ok(None);
        };

        let mut url = api_base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FetchError::InvalidApiBase(api_base.clone()))?;
            segments
                .pop_if_empty()
                .extend(["repos", owner.as_str(), repo.as_str(), "contents", "keymapping"]);
            if !bundle_id.is_empty() {
                segments.push(bundle_id);
            }
        }
        Ok(Some(url))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::GitHub { owner, repo } => write!(f, "{}/{}", owner, repo),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
