//! Frame timing shown in the header.
//!
//! The runtime feeds the interval between renders and the time spent in
//! `Terminal::draw`; the renderer reads an immutable snapshot.

mod render;
mod state;

pub use render::status_spans;
pub use state::{StatusLine, StatusLineAccumulator};
