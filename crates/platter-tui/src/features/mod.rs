//! Feature slices: each owns its state, update logic and rendering.

pub mod catalog;
pub mod statusline;
