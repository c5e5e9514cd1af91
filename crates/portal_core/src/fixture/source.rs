//! Byte sources for fixture documents.
//!
//! # Invariants
//! - Only plain `<name>.json` file names are fetched; anything that could
//!   escape the fixture root is rejected before touching the source.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

static FIXTURE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.json$").expect("valid fixture name regex"));

/// Failure to obtain or decode one fixture document.
#[derive(Debug)]
pub enum FetchError {
    InvalidName(String),
    NotFound(String),
    Status { name: String, code: u16 },
    Io { name: String, source: std::io::Error },
    Transport { name: String, message: String },
    Parse { name: String, source: serde_json::Error },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid fixture name `{name}`"),
            Self::NotFound(name) => write!(f, "fixture not found: {name}"),
            Self::Status { name, code } => write!(f, "failed to load {name}: {code}"),
            Self::Io { name, source } => write!(f, "failed to read {name}: {source}"),
            Self::Transport { name, message } => write!(f, "failed to fetch {name}: {message}"),
            Self::Parse { name, source } => write!(f, "malformed JSON in {name}: {source}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Where fixture bytes come from.
pub trait FixtureSource: Send + Sync {
    /// Fetches the raw document for `name` (for example `members.json`).
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError>;

    /// Short human-readable location, used in log records.
    fn describe(&self) -> String;
}

pub(crate) fn validate_name(name: &str) -> Result<(), FetchError> {
    if FIXTURE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(FetchError::InvalidName(name.to_string()))
    }
}

/// Reads fixtures from files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FixtureSource for DirectorySource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        validate_name(name)?;
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(name.to_string())
            } else {
                FetchError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches fixtures with blocking GET requests under a base URL.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Creates a source rooted at `base_url` (trailing slash optional).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

impl FixtureSource for HttpSource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        validate_name(name)?;
        let transport = |err: reqwest::Error| FetchError::Transport {
            name: name.to_string(),
            message: err.to_string(),
        };

        let response = self.client.get(self.url_for(name)).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                name: name.to_string(),
                code: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(transport)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// In-memory source that counts fetches per name.
///
/// Serves embedded fixtures and lets tests observe how many times the
/// underlying source was hit.
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Result<Vec<u8>, u16>>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `value` serialized as JSON under `name`.
    pub fn with_json(mut self, name: &str, value: &serde_json::Value) -> Self {
        self.documents
            .insert(name.to_string(), Ok(value.to_string().into_bytes()));
        self
    }

    /// Serves raw bytes under `name`, which need not be valid JSON.
    pub fn with_raw(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(name.to_string(), Ok(bytes.into()));
        self
    }

    /// Answers `name` with a non-success status code.
    pub fn with_status(mut self, name: &str, code: u16) -> Self {
        self.documents.insert(name.to_string(), Err(code));
        self
    }

    /// Number of times `name` was requested from this source.
    pub fn fetch_count(&self, name: &str) -> usize {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .unwrap_or(0)
    }
}

impl FixtureSource for MemorySource {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        validate_name(name)?;
        *self
            .fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert(0) += 1;

        match self.documents.get(name) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(code)) => Err(FetchError::Status {
                name: name.to_string(),
                code: *code,
            }),
            None => Err(FetchError::NotFound(name.to_string())),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl<S: FixtureSource + ?Sized> FixtureSource for std::sync::Arc<S> {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: FixtureSource + ?Sized> FixtureSource for Box<S> {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_name, DirectorySource, FetchError, FixtureSource};

    #[test]
    fn accepts_plain_json_names() {
        assert!(validate_name("members.json").is_ok());
        assert!(validate_name("adoption-matrix.json").is_ok());
    }

    #[test]
    fn rejects_names_that_escape_the_root() {
        for name in ["../secrets.json", "data/members.json", "members.yaml", ""] {
            assert!(
                matches!(validate_name(name), Err(FetchError::InvalidName(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn directory_source_maps_missing_file_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.fetch("members.json").unwrap_err();
        assert!(matches!(err, FetchError::NotFound(name) if name == "members.json"));
    }
}
