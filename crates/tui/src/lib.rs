//! Interactive terminal UI for `stockr`.
//!
//! The [`App`] controller owns two stores: [`ProductStore`] holds the last
//! product snapshot fetched from the backend and [`ViewState`] holds every
//! UI-only transient (loading flag, error report, search input, modal
//! animations and draft buffers). Backend calls run on a background worker
//! so the event loop never blocks on the network.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod requests;
mod runtime;
pub mod store;
pub mod style;
pub mod view;

pub use app::App;
pub use config::UiSettings;
pub use outcome::SessionOutcome;
pub use runtime::run;
pub use store::ProductStore;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
pub use view::{ErrorOrigin, ErrorReport, ModalKind, ViewState};
