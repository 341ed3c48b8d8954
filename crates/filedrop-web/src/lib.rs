//! filedrop-web: browser bindings for filedrop.
//!
//! Resolves page elements by id, wraps them in the `filedrop-core`
//! capability traits, and registers the click, drag, drop, and change
//! listeners. Exposes `setupDragDrop` to page JavaScript.
//!
//! Functions that touch the DOM require a browser environment
//! (`wasm32-unknown-unknown` target).

pub mod bind;
pub mod console;
pub mod elements;
pub mod exports;

pub use bind::{BindError, BrowserBinder, bind, bind_with_config, parse_config};
pub use elements::{BrowserFiles, DropEvent, InputElement, PreviewElement, ZoneElement};
