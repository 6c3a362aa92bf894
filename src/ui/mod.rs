//! the screens and everything they need to run
pub mod effect;
pub mod messages;
pub mod route;
pub mod screens;
pub mod state;
pub mod themes;

pub use {
    route::{Navigator, Route},
    screens::{DetailScreen, ListScreen},
};
