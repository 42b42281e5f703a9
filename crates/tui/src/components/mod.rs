//! UI building blocks shared across rendering and state modules.

/// Centered overlay panes and form lines.
pub mod modal;
/// Header prompt with search input and progress display.
pub mod prompt;
/// Table row construction and value formatting.
pub mod rows;
/// Scrollbar for the product table.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use modal::{FormLine, ModalFrame, centered_rect, render_modal};
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::{build_product_rows, format_price};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use tables::{TableSpec, render_message, render_table};
