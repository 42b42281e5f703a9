//! Shared plumbing for the `stockr` binary.
//!
//! The binary parses its command line and configuration, then hands a
//! [`stockr_api::HttpProductsApi`] to the terminal UI in [`stockr_tui`].
//! This library holds the pieces that are useful outside `main`: directory
//! resolution and log setup.

pub mod app_dirs;
pub mod logging;
