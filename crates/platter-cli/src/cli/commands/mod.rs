//! CLI command handlers.

pub mod browse;
pub mod config;
pub mod pages;
pub mod search;
pub mod show;
