//! Browser console reporting.
//!
//! Messages are prefixed with the crate name so they can be filtered in
//! developer tools alongside the host page's own output.

const PREFIX: &str = "filedrop";

/// Report a recoverable problem at warning level.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&format!("{PREFIX}: {message}").into());
}

/// Report routine activity at debug level.
pub fn debug(message: &str) {
    web_sys::console::debug_1(&format!("{PREFIX}: {message}").into());
}
