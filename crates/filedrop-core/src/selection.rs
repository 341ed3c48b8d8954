//! File sets and the preview text derived from them.
//!
//! A file set is only ever inspected for its length and the name of its
//! first entry, so [`FileList`] exposes exactly that plus indexed name
//! access for diagnostics.

/// Errors produced when summarizing a file set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The file set holds no files.
    #[error("no files selected")]
    Empty,

    /// The entry at the given index exists but its name could not be read.
    #[error("file at index {0} has no readable name")]
    MissingName(usize),
}

/// An ordered, read-only collection of file handles.
///
/// Implemented for the browser's `FileList` in the web crate and for
/// `Vec<FileEntry>` here so host-side callers and tests can build sets
/// directly.
pub trait FileList {
    /// Number of files in the set.
    fn len(&self) -> usize;

    /// Name of the file at `index`, or `None` when out of range.
    fn name(&self, index: usize) -> Option<String>;

    /// Returns `true` if the set holds no files.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All names in set order. Entries without a readable name are skipped.
    fn names(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.name(i)).collect()
    }
}

/// A plain file handle identified by its name.
///
/// The content itself is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name as reported by the platform, without any path.
    pub name: String,
}

impl FileEntry {
    /// Create a new file entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileList for Vec<FileEntry> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn name(&self, index: usize) -> Option<String> {
        self.get(index).map(|f| f.name.clone())
    }
}

/// Summarize a file set as a single line of preview text.
///
/// - more than one file: `"{N} files selected"`
/// - exactly one file: that file's name, verbatim
///
/// # Errors
///
/// Returns [`SelectionError::Empty`] when the set holds no files, and
/// [`SelectionError::MissingName`] when a single-file set's entry has no
/// readable name.
pub fn preview_text<F: FileList + ?Sized>(files: &F) -> Result<String, SelectionError> {
    match files.len() {
        0 => Err(SelectionError::Empty),
        1 => files.name(0).ok_or(SelectionError::MissingName(0)),
        n => Ok(format!("{n} files selected")),
    }
}
