//! Platform abstraction layer
//!
//! The spin engine itself is platform-free. On the web, `web` exposes the
//! frame driver to the JS gesture and render layer.

#[cfg(target_arch = "wasm32")]
pub mod web;
