use std::path::{Path, PathBuf};

/// Represents the final configuration after resolving CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub source: Source,
    pub extensions: Vec<String>,
    pub respect_ignore: bool,
}

/// Where the leaf paths come from. Exactly one mode per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Directory(PathBuf),
    Files(Vec<PathBuf>),
}

/// A single entry of a [`FileStructure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File,
    Directory(FileStructure),
}

/// Ordered mapping from a path to either a file leaf or a nested directory.
///
/// Order is the directory-listing order seen at collection time and is never
/// re-sorted. Keys are unique within one level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStructure {
    entries: Vec<(PathBuf, Node)>,
}

impl FileStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat one-level structure for explicit file lists. Paths are used
    /// verbatim; a repeated path keeps its first position.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut structure = Self::new();
        for file in files {
            let file = file.into();
            if structure.get(&file).is_none() {
                structure.entries.push((file, Node::File));
            }
        }
        structure
    }

    /// Appends an entry. Callers walking a directory never produce the same
    /// path twice at one level, so no lookup is done here.
    pub(crate) fn push(&mut self, path: PathBuf, node: Node) {
        self.entries.push((path, node));
    }

    pub fn get(&self, path: &Path) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(key, _)| key == path)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Node)> {
        self.entries.iter().map(|(path, node)| (path.as_path(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
