//! Yard loading service
//!
//! Reads layout and command script files through the filesystem boundary and
//! builds the engine state from them.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Layout, Railyard};
use crate::infrastructure::traits::FileSystem;

pub struct YardService {
    fs: Arc<dyn FileSystem>,
}

impl YardService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse a layout file.
    ///
    /// A missing file is reported as [`ApplicationError::LayoutNotFound`], the
    /// only error that ends a session before it starts.
    pub fn read_layout(&self, path: &Path) -> ApplicationResult<Layout> {
        debug!("read_layout: path={}", path.display());
        if !self.fs.is_file(path) {
            return Err(ApplicationError::LayoutNotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read layout", path)?;
        let layout = Layout::parse(&content).map_err(|source| ApplicationError::InvalidLayout {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("read_layout: {} tracks", layout.tracks.len());
        Ok(layout)
    }

    /// Build a yard from a layout file.
    pub fn load(&self, path: &Path) -> ApplicationResult<Railyard> {
        let layout = self.read_layout(path)?;
        Ok(Railyard::from_layout(&layout))
    }

    /// Read a command script: one command per line, blank lines and `#`
    /// comments skipped.
    pub fn read_script(&self, path: &Path) -> ApplicationResult<Vec<String>> {
        debug!("read_script: path={}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read command script", path)?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect())
    }
}
