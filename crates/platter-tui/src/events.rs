//! UI event types.
//!
//! Every input to the reducer is a `UiEvent`: terminal input, the frame and
//! tick cadence from the runtime, and results of async work sent to the
//! runtime's inbox.

use crossterm::event::Event as CrosstermEvent;
use platter_core::catalog::FoodItem;
use platter_core::pages::{Page, PageRequest};
use platter_core::source::FetchError;

#[derive(Debug)]
pub enum UiEvent {
    /// Animation tick.
    Tick,

    /// Emitted first in every loop iteration with the terminal size.
    Frame { width: u16, height: u16 },

    /// Terminal input (key, mouse, resize).
    Terminal(CrosstermEvent),

    /// A page fetch spawned for `request` finished.
    PageFetched {
        request: PageRequest,
        result: Result<Page<FoodItem>, FetchError>,
    },
}
