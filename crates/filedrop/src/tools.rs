//! Upload widgets for the toolkit's file-accepting pages.
//!
//! Each tool renders one drop zone. Element ids are derived from the
//! tool's slug so several widgets can share a page.

/// One upload widget: a file input, a drop zone, and a preview line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadWidget {
    /// URL path segment of the tool page, also the id prefix.
    pub slug: &'static str,
    /// Heading shown above the drop zone.
    pub title: &'static str,
    /// Form field name the server reads the files from.
    pub field: &'static str,
    /// Value of the input's `accept` attribute.
    pub accept: &'static str,
    /// Whether more than one file may be chosen.
    pub multiple: bool,
}

impl UploadWidget {
    /// Id of the `<input type="file">`.
    #[must_use]
    pub fn input_id(&self) -> String {
        format!("{}-input", self.slug)
    }

    /// Id of the drop-zone container.
    #[must_use]
    pub fn drop_zone_id(&self) -> String {
        format!("{}-drop-zone", self.slug)
    }

    /// Id of the preview text element.
    #[must_use]
    pub fn preview_id(&self) -> String {
        format!("{}-preview", self.slug)
    }

    /// Placeholder shown in the drop zone before anything is chosen.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        if self.multiple {
            "Drop files here or click to browse"
        } else {
            "Drop a file here or click to browse"
        }
    }
}

/// Every tool page that accepts uploads, in menu order.
pub const TOOLS: [UploadWidget; 5] = [
    UploadWidget {
        slug: "pdf-merger",
        title: "Merge PDFs",
        field: "pdfs",
        accept: ".pdf,application/pdf",
        multiple: true,
    },
    UploadWidget {
        slug: "pdf-compress",
        title: "Compress PDF",
        field: "pdf",
        accept: ".pdf,application/pdf",
        multiple: false,
    },
    UploadWidget {
        slug: "pdf-split",
        title: "Split PDF",
        field: "pdf",
        accept: ".pdf,application/pdf",
        multiple: false,
    },
    UploadWidget {
        slug: "pdf-to-jpg",
        title: "PDF to JPG",
        field: "pdf",
        accept: ".pdf,application/pdf",
        multiple: false,
    },
    UploadWidget {
        slug: "jpg-to-pdf",
        title: "JPG to PDF",
        field: "images",
        accept: "image/*",
        multiple: true,
    },
];
