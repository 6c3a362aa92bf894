//! the post list screen
use {
    crate::{
        client::PostsApi,
        display::{View, cards::render_list},
        error::Result,
        models::PostsResponse,
        ui::{
            effect::{FetchEffect, FetchTicket},
            route::Route,
            state::ListState,
        },
    },
    tracing::{debug, error},
};

/// lists posts, fetching them once when first activated
#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    /// what's on screen
    state: ListState,
    /// the fetch-on-activation effect; the list has no parameters
    effect: FetchEffect<()>,
}

impl ListScreen {
    /// make a screen that hasn't fetched anything yet
    pub fn new() -> Self {
        Self::default()
    }

    /// the current state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// start the fetch if this is the first activation
    pub fn activate(&mut self) -> Option<FetchTicket<()>> {
        let ticket = self.effect.trigger(())?;
        self.state = ListState::Loading;
        Some(ticket)
    }

    /// apply a fetch result, returning whether it was accepted
    ///
    /// failures are logged and shown as an empty list
    pub fn apply(&mut self, ticket: &FetchTicket<()>, result: Result<PostsResponse>) -> bool {
        if !self.effect.settle(ticket) {
            debug!("dropping stale post list");
            return false;
        }

        self.state = match result {
            Ok(resp) if resp.is_empty() => ListState::Empty,
            Ok(resp) => {
                debug!(count = resp.posts.len(), "showing posts");
                ListState::Loaded(resp.posts)
            }
            Err(e) => {
                error!(target: "api_error", kind = ?e.kind(), "failed to load posts: {}", e);
                ListState::Empty
            }
        };

        true
    }

    /// activate the screen and run the fetch to completion
    ///
    /// returns whether a fetch ran
    pub async fn mount(&mut self, api: &dyn PostsApi) -> bool {
        let Some(ticket) = self.activate() else {
            return false;
        };

        let result = api.list_posts().await;
        self.apply(&ticket, result)
    }

    /// the navigation request for the card at `index`
    pub fn select(&self, index: usize) -> Option<Route> {
        self.state
            .posts()
            .get(index)
            .map(|post| Route::Post { id: post.id })
    }

    /// leave the screen; a pending result is dropped and the next activation refetches
    pub fn dismiss(&mut self) {
        self.effect.reset();
        self.state = ListState::Loading;
    }

    /// draw the screen
    pub fn render(&self, view: &View) -> String {
        render_list(&self.state, view)
    }
}
