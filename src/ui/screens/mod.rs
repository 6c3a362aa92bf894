//! the two screens: the post list and a single post
mod detail;
mod list;

pub use {detail::DetailScreen, list::ListScreen};
