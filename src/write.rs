//! Site persistence.
//!
//! Stage 3 of the build pipeline. Every [`Document`](crate::types::Document)
//! in a [`Site`] becomes `<output_dir>/<name>.html`. Existing files are
//! overwritten; writing stops at the first failure and files already written
//! are left in place.

use crate::types::Site;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Destination for a generated site.
pub trait WebsiteRepository {
    /// Persist every document, returning where each one went.
    fn save(&self, site: &Site) -> Result<Vec<PathBuf>, WriteError>;
}

/// Writes a site into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSystemWebsiteRepository {
    output_dir: PathBuf,
}

impl FileSystemWebsiteRepository {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl WebsiteRepository for FileSystemWebsiteRepository {
    fn save(&self, site: &Site) -> Result<Vec<PathBuf>, WriteError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| WriteError {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(site.len());
        for document in site.documents() {
            let path = self.output_dir.join(document.filename());
            fs::write(&path, &document.content).map_err(|source| WriteError {
                path: path.clone(),
                source,
            })?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
