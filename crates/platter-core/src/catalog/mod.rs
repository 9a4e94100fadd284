//! Demo catalog: the record type, a seeded generator, and an in-memory
//! paginated source with simulated latency.
//!
//! The catalog is an ordinary value constructed by the caller and handed to
//! whoever needs it. Independent catalogs never share state.

mod generator;
mod item;
mod mock;

pub use generator::generate_catalog;
pub use item::{FoodItem, ItemId};
pub use mock::{CatalogOptions, MockCatalog};
