mod tools;

use dioxus::prelude::*;
use filedrop_core::DEFAULT_HIGHLIGHT_CLASS;
use tools::{TOOLS, UploadWidget};

fn main() {
    dioxus::launch(app);
}

/// Root component: one upload card per toolkit tool.
fn app() -> Element {
    // Highlight style for the class the drop zones toggle, so the page
    // works without a utility-CSS build step.
    let highlight_css = format!(
        ".{DEFAULT_HIGHLIGHT_CLASS} {{ border-color: #ef4444; background-color: #fef2f2; }}"
    );

    rsx! {
        style { dangerous_inner_html: highlight_css }

        div { class: "min-h-screen flex flex-col",
            header { class: "px-6 py-4 border-b",
                h1 { class: "text-2xl", "PDF Toolkit" }
                p { class: "text-sm", "Merge, compress, split, and convert documents" }
            }

            main { class: "flex-1 grid gap-6 p-6 md:grid-cols-2",
                for widget in TOOLS {
                    UploadCard { key: "{widget.slug}", widget }
                }
            }
        }
    }
}

/// A drop zone with its hidden file input and preview line.
///
/// The listeners are attached once, after the elements are in the DOM.
#[component]
fn UploadCard(widget: UploadWidget) -> Element {
    use_effect(move || {
        if let Err(e) = filedrop_web::bind(
            &widget.input_id(),
            &widget.drop_zone_id(),
            &widget.preview_id(),
        ) {
            filedrop_web::console::warn(&format!("{}: {e}", widget.slug));
        }
    });

    rsx! {
        section { class: "rounded-lg p-4",
            h2 { class: "text-lg font-semibold mb-2", "{widget.title}" }

            input {
                id: widget.input_id(),
                r#type: "file",
                name: widget.field,
                accept: widget.accept,
                multiple: widget.multiple,
                hidden: true,
            }

            div {
                id: widget.drop_zone_id(),
                class: "border-2 border-dashed rounded-lg p-6 text-center cursor-pointer transition-colors",
                p { id: widget.preview_id(), class: "text-sm", "{widget.prompt()}" }
            }
        }
    }
}
