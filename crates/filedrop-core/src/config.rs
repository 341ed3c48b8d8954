//! Binder configuration.

use serde::{Deserialize, Serialize};

/// Class toggled on the drop zone while files are dragged over it.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "border-red-500";

/// Errors raised by [`BinderConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The highlight class is empty or contains whitespace, which the
    /// DOM class-list API rejects.
    #[error("invalid highlight class: {0:?}")]
    InvalidHighlightClass(String),
}

/// What a drop or change with zero files does to the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySelection {
    /// Leave the input's file set and the preview text untouched.
    ///
    /// After an empty change event the preview keeps showing the previous
    /// selection while the input holds no files.
    #[default]
    Ignore,
    /// Clear the preview text. The input's file set is still left untouched.
    Clear,
}

/// Tunable behavior for a [`DropZoneBinder`](crate::DropZoneBinder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Class added to the drop zone on drag-over and removed on
    /// drag-leave or drop.
    pub highlight_class: String,
    /// Handling of empty file sets.
    pub empty_selection: EmptySelection,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_owned(),
            empty_selection: EmptySelection::default(),
        }
    }
}

impl BinderConfig {
    /// Check that the configuration can be applied to a DOM element.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHighlightClass`] if the class name is
    /// empty or contains whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let class = &self.highlight_class;
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHighlightClass(class.clone()));
        }
        Ok(())
    }
}
