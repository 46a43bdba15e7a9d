//! Source Resolver Implementation
//!
//! Resolves declared sources from the local file system and over HTTP(S),
//! and expands directory sources into one declaration per contained file.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::entities::{ContentSource, DesiredFile};
use crate::domain::ports::source_resolver::{SourceError, SourceResolver, SourceResult};
use crate::domain::value_objects::join_destination;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves sources from disk and the network
pub struct FsSourceResolver {
    client: OnceLock<Client>,
    timeout: Duration,
}

impl FsSourceResolver {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: OnceLock::new(),
            timeout,
        }
    }

    /// The HTTP client, built on first use
    fn client(&self, url: &str) -> SourceResult<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("structuresmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(self.client.get_or_init(|| built))
    }

    fn fetch(&self, url: &str) -> SourceResult<Vec<u8>> {
        info!(url = %url, "Downloading");
        let request_error = |e: reqwest::Error| SourceError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client(url)?.get(url).send().map_err(request_error)?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(SourceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(request_error)?;
        debug!(url = %url, size = bytes.len(), "Download complete");
        Ok(bytes.to_vec())
    }

    fn read_local(path: &Path) -> SourceResult<Vec<u8>> {
        if path.is_dir() {
            return Err(SourceError::IsDirectory(path.to_path_buf()));
        }
        std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }

    /// Walk `root` and declare every non-directory entry beneath it.
    ///
    /// Entries are visited in file-name order so the result is stable.
    fn expand_directory(parent: &DesiredFile, root: &Path) -> SourceResult<Vec<DesiredFile>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| SourceError::Walk {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                message: e.to_string(),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let destination = join_destination(parent.destination(), relative);
            files.push(parent.child(destination, entry.path().to_path_buf()));
        }

        debug!(
            root = %root.display(),
            count = files.len(),
            "Expanded directory source"
        );
        Ok(files)
    }
}

impl Default for FsSourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceResolver for FsSourceResolver {
    fn resolve(&self, source: &ContentSource) -> SourceResult<Vec<u8>> {
        match source {
            ContentSource::Content(content) => Ok(content.as_bytes().to_vec()),
            ContentSource::Url(url) => self.fetch(url),
            ContentSource::File(path) => Self::read_local(path),
            ContentSource::Directory(path) => Err(SourceError::IsDirectory(path.clone())),
        }
    }

    fn expand(&self, file: DesiredFile) -> SourceResult<Vec<DesiredFile>> {
        let root: Option<PathBuf> = match file.source() {
            ContentSource::Directory(path) => Some(path.clone()),
            ContentSource::File(path) if path.is_dir() => Some(path.clone()),
            ContentSource::File(path) if !path.exists() => {
                return Err(SourceError::NotFound(path.clone()))
            }
            _ => None,
        };
        match root {
            Some(root) => Self::expand_directory(&file, &root),
            None => Ok(vec![file]),
        }
    }
}
