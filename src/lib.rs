//! postrs is an in-terminal browser for JSON post feeds
//!
//! the library half holds the data model, the api client, the screen state
//! machines and the renderers. the `cli` feature adds the interactive shell.
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

#[cfg(feature = "cli")]
pub mod app;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod macros;
pub mod models;
pub mod ui;
pub mod utils;
