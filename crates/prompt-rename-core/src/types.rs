use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenameEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Ordered list of renames. Entries run in insertion order, so renames of
/// files inside a directory must come before the rename of the directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenamePlan {
    entries: Vec<RenameEntry>,
}

impl RenamePlan {
    pub fn new(entries: Vec<RenameEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<RenameEntry> for RenamePlan {
    fn from_iter<I: IntoIterator<Item = RenameEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Final path component for display, falling back to the whole path when
/// there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
