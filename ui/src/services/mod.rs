//! Browser-facing services. Everything here talks to web-sys and is only
//! compiled for builds that target the browser.

#[cfg(feature = "web")]
pub mod dom;
