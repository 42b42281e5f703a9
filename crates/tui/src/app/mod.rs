//! The View-State Controller.
//!
//! [`App`] ties the product store, the view state and the request worker
//! together. The implementation is split by concern: key handling, controller
//! operations, and rendering.

mod actions;
mod operations;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub use state::App;
