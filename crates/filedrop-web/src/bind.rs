//! Element lookup and listener registration.
//!
//! [`bind`] resolves the three element ids in the current document,
//! builds a [`DropZoneBinder`] over them, and registers one listener per
//! [`Trigger`]. Listeners live as long as the page; there is no unbind.

use std::rc::Rc;

use filedrop_core::{BinderConfig, ConfigError, DropZoneBinder, Element, Trigger};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::console;
use crate::elements::{DropEvent, InputElement, PreviewElement, ZoneElement};

/// Errors that can occur when binding a drop zone.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No element with the given id exists in the document.
    #[error("no element with id {id:?}")]
    ElementNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The element exists but is not of the required kind.
    #[error("element {id:?} is not an {expected}")]
    WrongElementType {
        /// The id that was looked up.
        id: String,
        /// The DOM interface the element must implement.
        expected: &'static str,
    },

    /// The binder configuration could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The binder configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// The binder type produced for browser elements.
pub type BrowserBinder = DropZoneBinder<InputElement, ZoneElement, PreviewElement>;

/// Parse a JSON object into a [`BinderConfig`].
///
/// Missing fields take their defaults; an empty string means the default
/// configuration.
///
/// # Errors
///
/// Returns [`BindError::ConfigParse`] for malformed JSON and
/// [`BindError::Config`] for a configuration that fails validation.
pub fn parse_config(json: &str) -> Result<BinderConfig, BindError> {
    let config = if json.trim().is_empty() {
        BinderConfig::default()
    } else {
        serde_json::from_str::<BinderConfig>(json)?
    };
    config.validate()?;
    Ok(config)
}

/// Bind a drop zone with the default configuration.
///
/// # Errors
///
/// See [`bind_with_config`].
pub fn bind(
    input_id: &str,
    drop_zone_id: &str,
    preview_id: &str,
) -> Result<(), BindError> {
    bind_with_config(input_id, drop_zone_id, preview_id, BinderConfig::default())
}

/// Bind a drop zone: clicking it opens the input's picker, dragging files
/// over it highlights it, and dropping or choosing files fills the input
/// and updates the preview text.
///
/// The lookups and config validation happen before any listener is
/// added, so those failures register nothing. A failure while adding
/// listeners leaves the ones already added in place.
///
/// # Errors
///
/// Returns [`BindError::ElementNotFound`] or
/// [`BindError::WrongElementType`] if an id does not resolve to a
/// suitable element, [`BindError::Config`] if `config` is invalid, and
/// [`BindError::JsError`] if the document is unavailable or a listener
/// cannot be added.
pub fn bind_with_config(
    input_id: &str,
    drop_zone_id: &str,
    preview_id: &str,
    config: BinderConfig,
) -> Result<(), BindError> {
    console_error_panic_hook::set_once();

    let document = document()?;
    let input = lookup::<HtmlInputElement>(&document, input_id, "HTMLInputElement")?;
    let zone = lookup::<HtmlElement>(&document, drop_zone_id, "HTMLElement")?;
    let preview = lookup::<HtmlElement>(&document, preview_id, "HTMLElement")?;

    let binder = Rc::new(DropZoneBinder::new(
        InputElement::new(input),
        ZoneElement::new(zone),
        PreviewElement::new(preview),
        config,
    )?);

    for trigger in Trigger::ALL {
        register(&binder, trigger)?;
    }
    console::debug(&format!(
        "bound drop zone {drop_zone_id:?} to input {input_id:?} and preview {preview_id:?}"
    ));

    Ok(())
}

fn document() -> Result<Document, BindError> {
    web_sys::window()
        .ok_or_else(|| BindError::JsError("no global window".into()))?
        .document()
        .ok_or_else(|| BindError::JsError("no document".into()))
}

fn lookup<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::ElementNotFound { id: id.to_owned() })?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}

/// Attach the listener for one trigger. The closure is leaked so it
/// stays alive for the page lifetime.
fn register(binder: &Rc<BrowserBinder>, trigger: Trigger) -> Result<(), BindError> {
    let b = Rc::clone(binder);
    let listener: Closure<dyn FnMut(web_sys::Event)> = match trigger {
        Trigger::Activate => Closure::new(move |_: web_sys::Event| b.on_activate()),
        Trigger::DragLeave => Closure::new(move |_: web_sys::Event| b.on_drag_leave()),
        Trigger::DragOver => Closure::new(move |event: web_sys::Event| {
            if let Some(drag) = event.dyn_ref::<web_sys::DragEvent>() {
                b.on_drag_over(&DropEvent::new(drag));
            }
        }),
        Trigger::Drop => Closure::new(move |event: web_sys::Event| {
            let Some(drag) = event.dyn_ref::<web_sys::DragEvent>() else {
                return;
            };
            report(trigger, b.on_drop(&DropEvent::new(drag)));
        }),
        Trigger::Change => Closure::new(move |_: web_sys::Event| report(trigger, b.on_change())),
    };

    let target: &web_sys::EventTarget = match trigger.element() {
        Element::DropZone => binder.zone().as_dom().unchecked_ref(),
        Element::Input => binder.input().as_dom().unchecked_ref(),
    };
    let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
    target.add_event_listener_with_callback(trigger.event_type(), callback)?;
    listener.forget();
    Ok(())
}

fn report<E: std::fmt::Display>(trigger: Trigger, outcome: Result<String, E>) {
    match outcome {
        Ok(text) => console::debug(&format!("{trigger}: {text}")),
        Err(e) => console::warn(&format!("{trigger}: {e}")),
    }
}
