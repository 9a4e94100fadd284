//! Shared widgets and text helpers for the TUI.

pub mod scrollbar;
pub mod text;

pub use scrollbar::Scrollbar;
pub use text::{spread, truncate_with_ellipsis};
