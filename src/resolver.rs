//! Maps request targets to files under the configured document root.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::config::StaticFilesConfig;

/// Outcome of resolving and loading a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The requested file, fully loaded (200).
    Resource(Vec<u8>),
    /// The target was missing; the configured error document was loaded in
    /// its place (404).
    ErrorDocument(Vec<u8>),
    /// Whatever path we ended up with could not be opened or read (500).
    /// Covers a missing error document too; there is no second fallback.
    Unreadable,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
    default_document: String,
    error_document: String,
}

impl Resolver {
    pub fn new(cfg: &StaticFilesConfig) -> Self {
        Self {
            root: cfg.root.clone(),
            default_document: cfg.default_document.clone(),
            error_document: cfg.error_document.clone(),
        }
    }

    /// Composes the filesystem path for a request target.
    ///
    /// `/` rewrites to the default document; any other target is joined under
    /// the root with its leading slash stripped (a bare join would let an
    /// absolute target escape the root entirely).
    pub fn target_path(&self, target: &str) -> PathBuf {
        if target == "/" {
            self.root.join(&self.default_document)
        } else {
            self.root.join(target.trim_start_matches('/'))
        }
    }

    /// Resolves a target and loads the resulting file into memory.
    ///
    /// The file read is synchronous and blocks the calling worker for the
    /// duration of local disk I/O; this is the single intentionally blocking
    /// stage of the pipeline.
    pub fn resolve(&self, target: &str) -> Resolution {
        let mut path = self.target_path(target);
        let mut substituted = false;

        if !path.exists() {
            warn!("{} not found, serving {}", path.display(), self.error_document);
            path = self.root.join(&self.error_document);
            substituted = true;
        }

        match fs::read(&path) {
            Ok(bytes) if substituted => Resolution::ErrorDocument(bytes),
            Ok(bytes) => Resolution::Resource(bytes),
            Err(e) => {
                warn!("could not open {}: {}", path.display(), e);
                Resolution::Unreadable
            }
        }
    }
}
