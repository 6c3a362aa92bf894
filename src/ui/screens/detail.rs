//! the single post screen
use {
    crate::{
        client::PostsApi,
        display::{View, detail::render_detail},
        error::Result,
        models::Post,
        ui::{
            effect::{FetchEffect, FetchTicket},
            state::DetailState,
        },
    },
    tracing::{debug, error},
};

/// shows one post, refetching whenever the post id changes
#[derive(Debug, Clone, Default)]
pub struct DetailScreen {
    /// what's on screen
    state: DetailState,
    /// the fetch-on-activation effect, keyed by post id
    effect: FetchEffect<i64>,
}

impl DetailScreen {
    /// make a screen that hasn't fetched anything yet
    pub fn new() -> Self {
        Self::default()
    }

    /// the current state
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// the id of the post being shown (or loaded)
    pub fn post_id(&self) -> Option<i64> {
        self.effect.key().copied()
    }

    /// start a fetch if `id` differs from the last one
    pub fn activate(&mut self, id: i64) -> Option<FetchTicket<i64>> {
        let ticket = self.effect.trigger(id)?;
        self.state = DetailState::Loading;
        Some(ticket)
    }

    /// apply a fetch result, returning whether it was accepted
    ///
    /// any failure, not-found included, is logged and shown as not found
    pub fn apply(&mut self, ticket: &FetchTicket<i64>, result: Result<Post>) -> bool {
        if !self.effect.settle(ticket) {
            debug!(id = ticket.key, "dropping stale post");
            return false;
        }

        self.state = match result {
            Ok(post) => DetailState::Loaded(post),
            Err(e) => {
                error!(target: "api_error", id = ticket.key, kind = ?e.kind(), "post {} not loaded: {}", ticket.key, e);
                DetailState::NotFound
            }
        };

        true
    }

    /// activate the screen for `id` and run the fetch to completion
    ///
    /// returns whether a fetch ran
    pub async fn mount(&mut self, id: i64, api: &dyn PostsApi) -> bool {
        let Some(ticket) = self.activate(id) else {
            return false;
        };

        let result = api.get_post_by_id(id).await;
        self.apply(&ticket, result)
    }

    /// leave the screen; a pending result is dropped and the next activation refetches
    pub fn dismiss(&mut self) {
        self.effect.reset();
        self.state = DetailState::Loading;
    }

    /// draw the screen
    pub fn render(&self, view: &View) -> String {
        render_detail(&self.state, view)
    }
}
