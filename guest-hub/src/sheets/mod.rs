//! Tabular configuration sources
//!
//! Hotels are configured in published spreadsheets (settings, localized
//! strings, menus). This module fetches the CSV exports and turns them into
//! rows and typed tables.

pub mod fetcher;
pub mod parser;
pub mod tables;

pub use fetcher::{HttpTableFetcher, MemoryTableFetcher, SourceError, TableFetcher, cache_busted};
pub use parser::parse_table;
pub use tables::{SettingsTable, localized_strings};
