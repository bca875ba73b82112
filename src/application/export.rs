//! Export loading service
//!
//! Reads tree export files (single files or whole directories) and hands
//! their contents to the parsing core. This is the boundary where absent or
//! undecodable input surfaces as a typed error; everything past it is total.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{LayoutEngine, LayoutNode, TreeBuilder, TreeNode};

/// One parsed export file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExport {
    pub path: PathBuf,
    pub tree: TreeNode,
}

/// Service for loading and parsing export files.
pub struct ExportService {
    builder: TreeBuilder,
    layout_engine: LayoutEngine,
    export_extension: String,
}

impl ExportService {
    /// Build a service from settings; fails on invalid encoding config.
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        Ok(Self {
            builder: TreeBuilder::with_encoding(settings.encoding()?),
            layout_engine: LayoutEngine::new(settings.layout_options()),
            export_extension: settings.export_extension.clone(),
        })
    }

    /// Read an export file into a string.
    #[instrument(level = "debug", skip(self))]
    pub fn read(&self, path: &Path) -> ApplicationResult<String> {
        let bytes = fs::read(path).with_path_context("read export", path)?;
        String::from_utf8(bytes)
            .map_err(|_| ApplicationError::InvalidEncoding(path.to_path_buf()))
    }

    /// Read and parse a single export file.
    #[instrument(level = "debug", skip(self))]
    pub fn parse_file(&self, path: &Path) -> ApplicationResult<ParsedExport> {
        let text = self.read(path)?;
        let tree = self.builder.parse(&text);
        debug!(
            "parsed {}: {} nodes, depth {}",
            path.display(),
            tree.node_count(),
            tree.depth()
        );
        Ok(ParsedExport {
            path: path.to_path_buf(),
            tree,
        })
    }

    /// Parse every export in a directory, in sorted path order.
    ///
    /// Files that are not valid UTF-8 are skipped with a warning; the core's
    /// degradation philosophy applies to batch scans too.
    #[instrument(level = "debug", skip(self))]
    pub fn scan_directory(&self, directory: &Path) -> ApplicationResult<Vec<ParsedExport>> {
        if !directory.exists() {
            return Err(ApplicationError::FileNotFound(directory.to_path_buf()));
        }
        if !directory.is_dir() {
            return Err(ApplicationError::NotADirectory(directory.to_path_buf()));
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(directory) {
            let entry = entry.map_err(|e| ApplicationError::Io {
                context: format!("scan directory: {}", directory.display()),
                source: e.into(),
            })?;
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == self.export_extension.as_str())
            {
                paths.push(entry.path().to_path_buf());
            }
        }
        paths.sort();

        let mut exports = Vec::with_capacity(paths.len());
        for path in paths {
            match self.parse_file(&path) {
                Ok(export) => exports.push(export),
                Err(ApplicationError::InvalidEncoding(p)) => {
                    warn!("skipping undecodable export: {}", p.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(exports)
    }

    /// Layout for an already-parsed tree; None when there is nothing to box.
    pub fn layout(&self, tree: &TreeNode) -> Option<LayoutNode> {
        self.layout_engine.layout(tree)
    }
}
