//! `web-sys` implementations of the binder's collaborator traits.
//!
//! The wrappers are thin: each holds the DOM handle and forwards to the
//! corresponding browser API. Browser-side failures that the trait
//! signatures cannot carry are reported to the console.

use filedrop_core::{DragEvent, DropTarget, FileInput, FileList, PreviewSink};
use web_sys::{HtmlElement, HtmlInputElement};

use crate::console;

/// A browser `FileList`, as held by an `<input type="file">` or a
/// drag's `DataTransfer`.
#[derive(Debug, Clone)]
pub struct BrowserFiles(web_sys::FileList);

impl BrowserFiles {
    /// The underlying DOM file list.
    #[must_use]
    pub const fn as_dom(&self) -> &web_sys::FileList {
        &self.0
    }
}

impl From<web_sys::FileList> for BrowserFiles {
    fn from(list: web_sys::FileList) -> Self {
        Self(list)
    }
}

impl FileList for BrowserFiles {
    fn len(&self) -> usize {
        self.0.length() as usize
    }

    fn name(&self, index: usize) -> Option<String> {
        let index = u32::try_from(index).ok()?;
        self.0.get(index).map(|file| file.name())
    }
}

/// The `<input type="file">` element.
#[derive(Debug, Clone)]
pub struct InputElement(HtmlInputElement);

impl InputElement {
    /// Wrap an input element.
    #[must_use]
    pub const fn new(element: HtmlInputElement) -> Self {
        Self(element)
    }

    /// The underlying DOM element.
    #[must_use]
    pub const fn as_dom(&self) -> &HtmlInputElement {
        &self.0
    }
}

impl FileInput for InputElement {
    type Files = BrowserFiles;

    fn files(&self) -> Option<BrowserFiles> {
        self.0.files().map(BrowserFiles)
    }

    fn set_files(&self, files: &BrowserFiles) {
        self.0.set_files(Some(files.as_dom()));
    }

    fn open_picker(&self) {
        self.0.click();
    }
}

/// The drop-zone container.
#[derive(Debug, Clone)]
pub struct ZoneElement(HtmlElement);

impl ZoneElement {
    /// Wrap a drop-zone element.
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    /// The underlying DOM element.
    #[must_use]
    pub const fn as_dom(&self) -> &HtmlElement {
        &self.0
    }
}

impl DropTarget for ZoneElement {
    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.0.class_list().toggle_with_force(class, present) {
            console::warn(&format!("failed to toggle class {class:?}: {e:?}"));
        }
    }
}

/// The element whose text shows the current selection.
#[derive(Debug, Clone)]
pub struct PreviewElement(HtmlElement);

impl PreviewElement {
    /// Wrap a preview element.
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    /// The underlying DOM element.
    #[must_use]
    pub const fn as_dom(&self) -> &HtmlElement {
        &self.0
    }
}

impl PreviewSink for PreviewElement {
    fn set_text(&self, text: &str) {
        self.0.set_inner_text(text);
    }
}

/// A `dragover` or `drop` event on the drop zone.
#[derive(Debug)]
pub struct DropEvent<'a>(&'a web_sys::DragEvent);

impl<'a> DropEvent<'a> {
    /// Wrap a DOM drag event.
    #[must_use]
    pub const fn new(event: &'a web_sys::DragEvent) -> Self {
        Self(event)
    }
}

impl DragEvent for DropEvent<'_> {
    type Files = BrowserFiles;

    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn files(&self) -> Option<BrowserFiles> {
        self.0
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(BrowserFiles)
    }
}
