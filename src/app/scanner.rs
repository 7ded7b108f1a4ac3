use crate::app::error::ScanError;
use crate::app::filter::ExtensionFilter;
use crate::app::models::{FileStructure, Node};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Builds a [`FileStructure`] from a live directory tree.
pub struct Scanner {
    root: PathBuf,
    filter: ExtensionFilter,
    respect_ignore: bool,
}

impl Scanner {
    /// Validates and canonicalizes `root`. Keys of the collected structure
    /// all start with the canonical root.
    pub fn new(root: &Path, filter: ExtensionFilter) -> Result<Self, ScanError> {
        if !root.exists() {
            return Err(ScanError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }
        let root = fs::canonicalize(root).map_err(|source| ScanError::Canonicalize {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root,
            filter,
            respect_ignore: false,
        })
    }

    /// Honor `.gitignore`/`.ignore` files and skip hidden entries.
    pub fn respect_ignore(mut self, yes: bool) -> Self {
        self.respect_ignore = yes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the tree once, depth first, keeping directory-listing order.
    /// Directories without any matching file below them are dropped.
    pub fn collect(&self) -> Result<FileStructure, ScanError> {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(self.respect_ignore)
            .require_git(false)
            .follow_links(true);

        // Directories currently being filled, root first; index == depth.
        let mut open: Vec<(PathBuf, FileStructure)> =
            vec![(self.root.clone(), FileStructure::new())];

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.tolerate(err)?;
                    continue;
                }
            };

            let depth = entry.depth();
            if depth == 0 {
                continue;
            }
            close_until(&mut open, depth);

            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                open.push((entry.into_path(), FileStructure::new()));
            } else if file_type.is_file() && self.filter.matches(entry.path()) {
                if let Some((_, parent)) = open.last_mut() {
                    parent.push(entry.into_path(), Node::File);
                }
            }
        }

        close_until(&mut open, 1);
        let structure = open.pop().map(|(_, s)| s).unwrap_or_default();
        log::info!(
            "Collected {} top-level entries under {}",
            structure.len(),
            self.root.display()
        );
        Ok(structure)
    }

    /// Symlink cycles and dangling symlinks are skipped; anything else,
    /// including a directory that vanished mid-walk or an unreadable ignore
    /// file, aborts the walk.
    fn tolerate(&self, err: ignore::Error) -> Result<(), ScanError> {
        if is_symlink_loop(&err) {
            log::warn!("Skipping symlink cycle: {}", err);
            return Ok(());
        }
        if is_dangling_symlink(&err) {
            log::debug!("Skipping dangling symlink: {}", err);
            return Ok(());
        }

        let path = error_path(&err)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Err(ScanError::Access { path, source: err })
    }
}

/// Pops finished directories until only `depth` levels remain open,
/// attaching each non-empty one to its parent.
fn close_until(open: &mut Vec<(PathBuf, FileStructure)>, depth: usize) {
    while open.len() > depth {
        let Some((path, structure)) = open.pop() else {
            break;
        };
        if structure.is_empty() {
            continue;
        }
        if let Some((_, parent)) = open.last_mut() {
            parent.push(path, Node::Directory(structure));
        }
    }
}

fn is_symlink_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_symlink_loop(err),
        _ => false,
    }
}

/// A `NotFound` whose path is still present as a link: the link target is
/// missing, not the entry itself.
fn is_dangling_symlink(err: &ignore::Error) -> bool {
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
    not_found
        && error_path(err)
            .and_then(|path| fs::symlink_metadata(path).ok())
            .is_some_and(|meta| meta.file_type().is_symlink())
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
