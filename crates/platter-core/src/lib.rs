//! Windowed rendering and incremental pagination for long catalog lists.
//!
//! - [`window`]: which item indices a scroll position needs materialized.
//! - [`pages`]: the pagination state machine that accumulates pages.
//! - [`notifier`]: the bridge that asks for the next page near the end.
//! - [`source`]: the upstream contract and a headless fetch driver.
//! - [`catalog`]: the mock food catalog served through that contract.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod notifier;
pub mod pages;
pub mod source;
pub mod window;

pub use config::Config;
