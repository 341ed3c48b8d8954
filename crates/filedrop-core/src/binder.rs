//! Drop-zone event handlers over injected collaborators.
//!
//! [`DropZoneBinder`] holds handles to a file input, a drop zone, and a
//! preview element, and exposes one handler per [`Trigger`]. It never
//! looks anything up itself: the platform layer resolves the elements,
//! wraps them in the capability traits below, and forwards events.
//!
//! All trait methods take `&self` because DOM handles are shared
//! references into page state; test doubles use interior mutability.
//!
//! [`Trigger`]: crate::Trigger

use crate::config::{BinderConfig, ConfigError, EmptySelection};
use crate::selection::{FileList, SelectionError, preview_text};
use crate::trigger::Trigger;

/// A file input element.
pub trait FileInput {
    /// The platform's file set type.
    type Files: FileList;

    /// Current selection, or `None` if the input has never held one.
    fn files(&self) -> Option<Self::Files>;

    /// Replace the selection.
    fn set_files(&self, files: &Self::Files);

    /// Open the native file picker.
    fn open_picker(&self);
}

/// The drop-zone container.
pub trait DropTarget {
    /// Add (`present == true`) or remove a presentational class.
    fn set_class(&self, class: &str, present: bool);
}

/// The element that shows the selection summary.
pub trait PreviewSink {
    /// Overwrite the displayed text.
    fn set_text(&self, text: &str);
}

/// A drag or drop event delivered to the drop zone.
pub trait DragEvent {
    /// The platform's file set type.
    type Files: FileList;

    /// Suppress the browser's default handling of this event.
    fn prevent_default(&self);

    /// Files carried by the drag, if the transfer exposes any.
    fn files(&self) -> Option<Self::Files>;
}

/// Wires click, drag, drop, and change behavior between a file input,
/// a drop zone, and a preview element.
#[derive(Debug)]
pub struct DropZoneBinder<I, Z, P> {
    input: I,
    zone: Z,
    preview: P,
    config: BinderConfig,
}

impl<I, Z, P> DropZoneBinder<I, Z, P>
where
    I: FileInput,
    Z: DropTarget,
    P: PreviewSink,
{
    /// Create a binder over the three collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(input: I, zone: Z, preview: P, config: BinderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            input,
            zone,
            preview,
            config,
        })
    }

    /// The file input handle.
    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// The drop-zone handle.
    #[must_use]
    pub const fn zone(&self) -> &Z {
        &self.zone
    }

    /// Drop zone clicked: open the input's file picker.
    pub fn on_activate(&self) {
        self.input.open_picker();
    }

    /// Drag over the drop zone: suppress the default and highlight.
    pub fn on_drag_over<E: DragEvent>(&self, event: &E) {
        suppress_default(Trigger::DragOver, event);
        self.zone.set_class(&self.config.highlight_class, true);
    }

    /// Drag left the drop zone: remove the highlight.
    pub fn on_drag_leave(&self) {
        self.zone.set_class(&self.config.highlight_class, false);
    }

    /// Files dropped on the zone.
    ///
    /// Suppresses the default, removes the highlight, copies the dropped
    /// set into the input, and refreshes the preview. Returns the preview
    /// text that was written.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Empty`] if the drop carried no files; the
    /// input is left untouched and the preview follows
    /// [`BinderConfig::empty_selection`]. Returns
    /// [`SelectionError::MissingName`] if a single dropped file has no
    /// readable name, in which case nothing is changed.
    pub fn on_drop<E>(&self, event: &E) -> Result<String, SelectionError>
    where
        E: DragEvent<Files = I::Files>,
    {
        suppress_default(Trigger::Drop, event);
        self.zone.set_class(&self.config.highlight_class, false);

        let Some(files) = event.files().filter(|f| !f.is_empty()) else {
            return Err(self.apply_empty_selection());
        };
        let text = preview_text(&files)?;
        self.input.set_files(&files);
        self.preview.set_text(&text);
        Ok(text)
    }

    /// The input's selection changed: refresh the preview from it.
    ///
    /// Returns the preview text that was written.
    ///
    /// # Errors
    ///
    /// Same as [`on_drop`](Self::on_drop), for the input's current set.
    pub fn on_change(&self) -> Result<String, SelectionError> {
        let Some(files) = self.input.files().filter(|f| !f.is_empty()) else {
            return Err(self.apply_empty_selection());
        };
        let text = preview_text(&files)?;
        self.preview.set_text(&text);
        Ok(text)
    }

    /// Apply [`BinderConfig::empty_selection`] to the preview and return
    /// the error reported for an empty set.
    fn apply_empty_selection(&self) -> SelectionError {
        match self.config.empty_selection {
            EmptySelection::Ignore => {}
            EmptySelection::Clear => self.preview.set_text(""),
        }
        SelectionError::Empty
    }
}

fn suppress_default<E: DragEvent>(trigger: Trigger, event: &E) {
    if trigger.prevents_default() {
        event.prevent_default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// File set whose entries may lack a readable name.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Listing(Vec<Option<String>>);

    impl Listing {
        fn of(names: &[&str]) -> Self {
            Self(names.iter().map(|n| Some((*n).to_owned())).collect())
        }

        fn nameless() -> Self {
            Self(vec![None])
        }
    }

    impl FileList for Listing {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn name(&self, index: usize) -> Option<String> {
            self.0.get(index).cloned().flatten()
        }
    }

    #[derive(Default)]
    struct Input {
        files: RefCell<Option<Listing>>,
        pickers: Cell<usize>,
    }

    impl FileInput for Input {
        type Files = Listing;

        fn files(&self) -> Option<Listing> {
            self.files.borrow().clone()
        }

        fn set_files(&self, files: &Listing) {
            *self.files.borrow_mut() = Some(files.clone());
        }

        fn open_picker(&self) {
            self.pickers.set(self.pickers.get() + 1);
        }
    }

    #[derive(Default)]
    struct Zone(RefCell<Vec<String>>);

    impl DropTarget for Zone {
        fn set_class(&self, class: &str, present: bool) {
            let mut classes = self.0.borrow_mut();
            classes.retain(|c| c != class);
            if present {
                classes.push(class.to_owned());
            }
        }
    }

    #[derive(Default)]
    struct Preview(RefCell<String>);

    impl PreviewSink for Preview {
        fn set_text(&self, text: &str) {
            text.clone_into(&mut self.0.borrow_mut());
        }
    }

    struct Drag {
        files: Option<Listing>,
        prevented: Cell<bool>,
    }

    impl Drag {
        fn with(names: &[&str]) -> Self {
            Self::carrying(Some(Listing::of(names)))
        }

        fn carrying(files: Option<Listing>) -> Self {
            Self {
                files,
                prevented: Cell::new(false),
            }
        }
    }

    impl DragEvent for Drag {
        type Files = Listing;

        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn files(&self) -> Option<Listing> {
            self.files.clone()
        }
    }

    fn binder(config: BinderConfig) -> DropZoneBinder<Input, Zone, Preview> {
        DropZoneBinder::new(Input::default(), Zone::default(), Preview::default(), config).unwrap()
    }

    fn clearing() -> DropZoneBinder<Input, Zone, Preview> {
        binder(BinderConfig {
            empty_selection: EmptySelection::Clear,
            ..BinderConfig::default()
        })
    }

    fn highlighted(b: &DropZoneBinder<Input, Zone, Preview>) -> bool {
        b.zone().0.borrow().iter().any(|c| c == "border-red-500")
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BinderConfig {
            highlight_class: String::new(),
            ..BinderConfig::default()
        };
        let result = DropZoneBinder::new(Input::default(), Zone::default(), Preview::default(), config);
        assert!(result.is_err(), "empty highlight class must be rejected");
    }

    #[test]
    fn activate_opens_picker_once_and_nothing_else() {
        let b = binder(BinderConfig::default());
        b.on_activate();
        assert_eq!(b.input().pickers.get(), 1);
        assert!(b.input().files().is_none(), "activation must not touch files");
        assert!(b.preview.0.borrow().is_empty(), "activation must not touch preview");
        assert!(!highlighted(&b), "activation must not highlight");
    }

    #[test]
    fn drag_over_highlights_and_prevents_default() {
        let b = binder(BinderConfig::default());
        let drag = Drag::with(&["a.txt"]);
        b.on_drag_over(&drag);
        assert!(drag.prevented.get(), "drag-over must suppress default");
        assert!(highlighted(&b), "drag-over must highlight");
    }

    #[test]
    fn handlers_suppress_default_exactly_where_triggers_say() {
        let b = binder(BinderConfig::default());

        let over = Drag::with(&["a.txt"]);
        b.on_drag_over(&over);
        assert_eq!(over.prevented.get(), Trigger::DragOver.prevents_default());

        let dropped = Drag::with(&["a.txt"]);
        b.on_drop(&dropped).unwrap();
        assert_eq!(dropped.prevented.get(), Trigger::Drop.prevents_default());
    }

    #[test]
    fn repeated_drag_over_keeps_single_class() {
        let b = binder(BinderConfig::default());
        let drag = Drag::with(&["a.txt"]);
        b.on_drag_over(&drag);
        b.on_drag_over(&drag);
        assert_eq!(b.zone().0.borrow().len(), 1);
    }

    #[test]
    fn drop_copies_files_and_clears_highlight() {
        let b = binder(BinderConfig::default());
        let drag = Drag::with(&["a.txt", "b.txt"]);
        b.on_drag_over(&drag);
        let text = b.on_drop(&drag).unwrap();
        assert_eq!(text, "2 files selected");
        assert!(drag.prevented.get(), "drop must suppress default");
        assert!(!highlighted(&b), "drop must clear highlight");
        assert_eq!(b.input().files(), drag.files);
        assert_eq!(*b.preview.0.borrow(), "2 files selected");
    }

    #[test]
    fn empty_drop_is_ignored_by_default() {
        let b = binder(BinderConfig::default());
        b.on_drop(&Drag::with(&["keep.pdf"])).unwrap();

        let empty = Drag::with(&[]);
        assert_eq!(b.on_drop(&empty), Err(SelectionError::Empty));
        assert!(empty.prevented.get(), "empty drop must still suppress default");
        assert_eq!(b.input().files().unwrap().names(), vec!["keep.pdf"]);
        assert_eq!(*b.preview.0.borrow(), "keep.pdf");
    }

    #[test]
    fn drop_without_transfer_is_empty() {
        let b = binder(BinderConfig::default());
        let drag = Drag::carrying(None);
        assert_eq!(b.on_drop(&drag), Err(SelectionError::Empty));
        assert!(b.input().files().is_none(), "input must stay untouched");
    }

    #[test]
    fn empty_drop_clears_preview_when_configured() {
        let b = clearing();
        b.on_drop(&Drag::with(&["keep.pdf"])).unwrap();
        assert_eq!(b.on_drop(&Drag::with(&[])), Err(SelectionError::Empty));
        assert!(b.preview.0.borrow().is_empty(), "preview should be cleared");
        assert_eq!(b.input().files().unwrap().len(), 1, "input must stay untouched");
    }

    #[test]
    fn drop_without_transfer_clears_preview_when_configured() {
        let b = clearing();
        b.on_drop(&Drag::with(&["keep.pdf"])).unwrap();

        let drag = Drag::carrying(None);
        b.on_drag_over(&drag);
        assert_eq!(b.on_drop(&drag), Err(SelectionError::Empty));
        assert!(b.preview.0.borrow().is_empty(), "preview should be cleared");
        assert!(!highlighted(&b), "highlight must still be cleared");
        assert_eq!(b.input().files(), Some(Listing::of(&["keep.pdf"])));
    }

    #[test]
    fn drop_of_nameless_file_changes_nothing_but_highlight() {
        let b = binder(BinderConfig::default());
        b.on_drop(&Drag::with(&["keep.pdf"])).unwrap();

        let drag = Drag::carrying(Some(Listing::nameless()));
        b.on_drag_over(&drag);
        assert_eq!(b.on_drop(&drag), Err(SelectionError::MissingName(0)));
        assert!(drag.prevented.get(), "drop must suppress default");
        assert!(!highlighted(&b), "highlight must still be cleared");
        assert_eq!(b.input().files(), Some(Listing::of(&["keep.pdf"])));
        assert_eq!(*b.preview.0.borrow(), "keep.pdf");
    }

    #[test]
    fn drop_of_nameless_file_ignores_clear_policy() {
        let b = clearing();
        b.on_drop(&Drag::with(&["keep.pdf"])).unwrap();
        assert_eq!(
            b.on_drop(&Drag::carrying(Some(Listing::nameless()))),
            Err(SelectionError::MissingName(0))
        );
        assert_eq!(*b.preview.0.borrow(), "keep.pdf");
    }

    #[test]
    fn change_without_selection_is_empty() {
        let b = binder(BinderConfig::default());
        assert_eq!(b.on_change(), Err(SelectionError::Empty));
    }

    #[test]
    fn empty_change_keeps_stale_preview_by_default() {
        let b = binder(BinderConfig::default());
        b.input().set_files(&Listing::of(&["report.pdf"]));
        b.on_change().unwrap();

        b.input().set_files(&Listing::of(&[]));
        assert_eq!(b.on_change(), Err(SelectionError::Empty));
        assert_eq!(*b.preview.0.borrow(), "report.pdf");
    }

    #[test]
    fn empty_change_clears_preview_when_configured() {
        let b = clearing();
        b.input().set_files(&Listing::of(&["report.pdf"]));
        assert_eq!(b.on_change().unwrap(), "report.pdf");

        b.input().set_files(&Listing::of(&[]));
        assert_eq!(b.on_change(), Err(SelectionError::Empty));
        assert!(b.preview.0.borrow().is_empty(), "preview should be cleared");
    }

    #[test]
    fn custom_highlight_class_is_used() {
        let b = binder(BinderConfig {
            highlight_class: "is-dragging".to_owned(),
            ..BinderConfig::default()
        });
        b.on_drag_over(&Drag::with(&["a"]));
        assert_eq!(*b.zone().0.borrow(), vec!["is-dragging".to_owned()]);
        b.on_drag_leave();
        assert!(b.zone().0.borrow().is_empty(), "drag-leave must remove the class");
    }
}
