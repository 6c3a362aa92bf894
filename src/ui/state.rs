//! per-screen state containers
//!
//! a screen replaces its state wholesale on every transition and never edits
//! the posts inside it.
use crate::models::Post;

/// what the post list screen is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    /// the fetch hasn't finished
    #[default]
    Loading,
    /// the fetch returned at least one post, in response order
    Loaded(Vec<Post>),
    /// the fetch returned nothing, or failed
    Empty,
}

impl ListState {
    /// the posts being shown, empty unless loaded
    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Loaded(posts) => posts,
            Self::Loading | Self::Empty => &[],
        }
    }

    /// whether the fetch is still pending
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// what the post detail screen is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// the fetch hasn't finished
    #[default]
    Loading,
    /// the post was fetched
    Loaded(Post),
    /// the post doesn't exist, or the fetch failed
    NotFound,
}

impl DetailState {
    /// the post being shown, if any
    pub fn post(&self) -> Option<&Post> {
        match self {
            Self::Loaded(post) => Some(post),
            Self::Loading | Self::NotFound => None,
        }
    }

    /// whether the fetch is still pending
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
