// hdresize/src/processors/batch.rs
use crate::core::{ImageSelection, ResizeError, Result};
use crate::processors::Loader;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates the direct children of a directory and picks out the images.
pub struct DirectoryScanner {
    selection: ImageSelection,
    extensions: BTreeSet<String>,
    loader: Loader,
}

impl DirectoryScanner {
    pub fn new(selection: ImageSelection, extensions: BTreeSet<String>) -> Self {
        Self {
            selection,
            extensions,
            loader: Loader::new(),
        }
    }

    /// Direct children of `dir`, sorted by file name. Not recursive.
    pub fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => ResizeError::Io(io),
                None => ResizeError::InvalidParameter(format!(
                    "Symlink loop while listing {}",
                    dir.display()
                )),
            })?;
            entries.push(entry.into_path());
        }

        Ok(entries)
    }

    /// Whether `path` should be converted. Only regular files qualify; a symlink
    /// counts when its target is one, so dangling links are skipped.
    pub fn is_candidate(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        match self.selection {
            ImageSelection::Extension => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| crate::utils::is_image(name, &self.extensions))
                .unwrap_or(false),
            ImageSelection::Probe => self.loader.probe(path),
        }
    }

    /// Splits `entries` into images to convert and the number skipped.
    pub fn select(&self, entries: Vec<PathBuf>) -> (Vec<PathBuf>, usize) {
        let total = entries.len();
        let images: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| {
                let keep = self.is_candidate(path);
                if !keep {
                    log::debug!("Skipping {}", path.display());
                }
                keep
            })
            .collect();
        let skipped = total - images.len();
        (images, skipped)
    }
}
