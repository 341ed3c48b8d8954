//! filedrop-core: drop-zone behavior for file-upload widgets (sans-IO).
//!
//! Clicking a drop zone opens the file picker, dragging files over it
//! highlights it, and dropping or selecting files fills the file input
//! and updates a one-line preview ("N files selected" or the single
//! file's name).
//!
//! This crate has no browser dependency. The page elements are injected
//! through the capability traits in [`binder`], so the behavior can be
//! exercised with plain Rust test doubles. `filedrop-web` supplies the
//! `web-sys` implementations.

pub mod binder;
pub mod config;
pub mod selection;
pub mod trigger;

pub use binder::{DragEvent, DropTarget, DropZoneBinder, FileInput, PreviewSink};
pub use config::{BinderConfig, ConfigError, DEFAULT_HIGHLIGHT_CLASS, EmptySelection};
pub use selection::{FileEntry, FileList, SelectionError, preview_text};
pub use trigger::{Element, Trigger};
