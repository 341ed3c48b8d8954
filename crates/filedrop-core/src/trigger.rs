//! The DOM events a drop zone reacts to.

use std::fmt;

/// Which of the bound elements an event is listened for on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The drop-zone container.
    DropZone,
    /// The file input.
    Input,
}

/// One event on one element that the binder handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Primary activation (click) of the drop zone.
    Activate,
    /// Files dragged over the drop zone.
    DragOver,
    /// Drag left the drop zone without dropping.
    DragLeave,
    /// Files dropped on the drop zone.
    Drop,
    /// The file input's selection changed.
    Change,
}

impl Trigger {
    /// Every trigger, in registration order.
    pub const ALL: [Self; 5] = [
        Self::Activate,
        Self::DragOver,
        Self::DragLeave,
        Self::Drop,
        Self::Change,
    ];

    /// DOM event type passed to `addEventListener`.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::Activate => "click",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
            Self::Change => "change",
        }
    }

    /// Element the listener is attached to.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Self::Activate | Self::DragOver | Self::DragLeave | Self::Drop => Element::DropZone,
            Self::Change => Element::Input,
        }
    }

    /// Whether the handler suppresses the browser's default action.
    ///
    /// Without this on drag-over the browser refuses the drop, and on
    /// drop it navigates to the dropped file.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::DragOver | Self::Drop)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}
