//! Functions callable from page JavaScript.
//!
//! Failures are thrown as JS `Error`s, so a page-load-order mistake
//! (binding before the elements exist) surfaces in the console exactly
//! where the call was made.

use wasm_bindgen::prelude::*;

use crate::bind::{bind, bind_with_config, parse_config};

/// `setupDragDrop(inputId, dropZoneId, previewId)`
///
/// # Errors
///
/// Throws if any id does not resolve or a listener cannot be added.
#[wasm_bindgen(js_name = setupDragDrop)]
pub fn setup_drag_drop(
    input_id: &str,
    drop_zone_id: &str,
    preview_id: &str,
) -> Result<(), JsError> {
    Ok(bind(input_id, drop_zone_id, preview_id)?)
}

/// `setupDragDropWithConfig(inputId, dropZoneId, previewId, configJson)`
///
/// `configJson` is a JSON object with optional `highlight_class` and
/// `empty_selection` (`"ignore"` or `"clear"`) fields.
///
/// # Errors
///
/// Throws if the configuration is invalid, any id does not resolve, or a
/// listener cannot be added.
#[wasm_bindgen(js_name = setupDragDropWithConfig)]
pub fn setup_drag_drop_with_config(
    input_id: &str,
    drop_zone_id: &str,
    preview_id: &str,
    config_json: &str,
) -> Result<(), JsError> {
    let config = parse_config(config_json)?;
    Ok(bind_with_config(input_id, drop_zone_id, preview_id, config)?)
}
