//! Static-file fetching seam.
//!
//! The runtime only ever reads static files by site-relative path. The
//! [`Fetcher`] trait is that single operation; everything above it is pure.
//!
//! The production implementation is [`DirFetcher`], which serves a published
//! site directory the way a plain static file server would: a missing file is
//! a `404` response, not an error. Errors are reserved for failures to reach
//! the file at all.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {path}: {source}")]
    Io { path: String, source: io::Error },
}

/// A fetched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Reads static files by site-relative path.
///
/// `Sync` so independent loads can run on the rayon pool.
pub trait Fetcher: Sync {
    fn fetch(&self, path: &str) -> Result<Response, FetchError>;
}

/// Serves files from a site root directory.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a request path to a file under the root, refusing to escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let rel = Path::new(path.trim_start_matches('/'));
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(rel))
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, path: &str) -> Result<Response, FetchError> {
        let Some(file) = self.resolve(path) else {
            return Ok(Response::new(403, "Forbidden"));
        };
        if file.is_dir() {
            return Ok(Response::new(404, "Not Found"));
        }
        match fs::read_to_string(&file) {
            Ok(body) => Ok(Response::new(200, body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Response::new(404, "Not Found")),
            Err(source) => Err(FetchError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory fetcher that records every request.
    /// Requests are recorded behind a Mutex; the fetcher must be Sync.
    #[derive(Default)]
    pub struct MockFetcher {
        pub files: HashMap<String, Response>,
        pub failing: Vec<String>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn with_file(mut self, path: &str, body: &str) -> Self {
            self.files.insert(path.to_string(), Response::new(200, body));
            self
        }

        pub fn with_status(mut self, path: &str, status: u16) -> Self {
            self.files.insert(path.to_string(), Response::new(status, ""));
            self
        }

        pub fn with_failure(mut self, path: &str) -> Self {
            self.failing.push(path.to_string());
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Fetcher for MockFetcher {
        fn fetch(&self, path: &str) -> Result<Response, FetchError> {
            self.requests.lock().unwrap().push(path.to_string());
            if self.failing.iter().any(|p| p == path) {
                return Err(FetchError::Io {
                    path: path.to_string(),
                    source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
                });
            }
            Ok(self
                .files
                .get(path)
                .cloned()
                .unwrap_or_else(|| Response::new(404, "Not Found")))
        }
    }

    #[test]
    fn dir_fetcher_reads_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("articles")).unwrap();
        fs::write(tmp.path().join("articles/home.md"), "# Home").unwrap();

        let fetcher = DirFetcher::new(tmp.path());
        let response = fetcher.fetch("articles/home.md").unwrap();
        assert!(response.ok());
        assert_eq!(response.body, "# Home");
    }

    #[test]
    fn dir_fetcher_missing_is_404() {
        let tmp = tempfile::TempDir::new().unwrap();
        let fetcher = DirFetcher::new(tmp.path());
        let response = fetcher.fetch("nope.md").unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.ok());
    }

    #[test]
    fn dir_fetcher_directory_is_404() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("articles")).unwrap();
        let fetcher = DirFetcher::new(tmp.path());
        assert_eq!(fetcher.fetch("articles").unwrap().status, 404);
    }

    #[test]
    fn dir_fetcher_refuses_parent_traversal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let fetcher = DirFetcher::new(tmp.path().join("site"));
        assert_eq!(fetcher.fetch("../secret.md").unwrap().status, 403);
    }

    #[test]
    fn dir_fetcher_accepts_leading_slash() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("sidebar.json"), "{}").unwrap();
        let fetcher = DirFetcher::new(tmp.path());
        assert!(fetcher.fetch("/sidebar.json").unwrap().ok());
    }
}
