//! UI effect types.
//!
//! Effects are what the reducer asks the runtime to do. The reducer itself
//! never spawns tasks or touches the terminal.

use platter_core::pages::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the page described by `request` and report back with
    /// `UiEvent::PageFetched`.
    FetchPage { request: PageRequest },
}
