//! fetch-on-activation bookkeeping
//!
//! a screen triggers its effect with a key every time it becomes active. the
//! effect only hands out a [`FetchTicket`] when the key differs from the last
//! one it saw, so activating twice (or while a fetch is still pending) runs the
//! fetch once. results are accepted only for the newest ticket; anything older,
//! or anything arriving after [`FetchEffect::reset`], is dropped.

/// proof that a fetch was started for a given key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    /// the key the fetch was started for
    pub key: K,
    /// the generation the fetch belongs to
    generation: u64,
}

/// tracks which key was last fetched and whether that fetch is still pending
#[derive(Debug, Clone)]
pub struct FetchEffect<K> {
    /// the key of the latest triggered fetch
    key: Option<K>,
    /// bumped on every new fetch and on reset
    generation: u64,
    /// whether the latest fetch hasn't settled yet
    in_flight: bool,
}

impl<K> Default for FetchEffect<K> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            in_flight: false,
        }
    }
}

impl<K: Clone + PartialEq> FetchEffect<K> {
    /// make an effect that hasn't run yet
    pub fn new() -> Self {
        Self::default()
    }

    /// start a fetch for `key` unless one already ran or is running for it
    pub fn trigger(&mut self, key: K) -> Option<FetchTicket<K>> {
        if self.key.as_ref() == Some(&key) {
            return None;
        }

        self.generation += 1;
        self.key = Some(key.clone());
        self.in_flight = true;

        Some(FetchTicket {
            key,
            generation: self.generation,
        })
    }

    /// mark a fetch as finished, returning whether its result should be applied
    pub fn settle(&mut self, ticket: &FetchTicket<K>) -> bool {
        if ticket.generation != self.generation || !self.in_flight {
            return false;
        }

        self.in_flight = false;
        true
    }

    /// forget everything, so late results are dropped and the next trigger runs
    pub fn reset(&mut self) {
        self.key = None;
        self.generation += 1;
        self.in_flight = false;
    }

    /// whether a fetch is pending
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// the key of the latest fetch, pending or not
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_once_per_key() {
        let mut effect = FetchEffect::new();

        let ticket = effect.trigger(()).unwrap();
        assert!(effect.trigger(()).is_none(), "re-entrant trigger while pending");
        assert!(effect.settle(&ticket));
        assert!(effect.trigger(()).is_none(), "trigger after completion");
    }

    #[test]
    fn test_key_change_refetches_and_drops_stale_result() {
        let mut effect = FetchEffect::new();

        let first = effect.trigger(1).unwrap();
        let second = effect.trigger(2).unwrap();

        assert!(!effect.settle(&first));
        assert!(effect.is_in_flight());
        assert!(effect.settle(&second));
        assert_eq!(effect.key(), Some(&2));
    }

    #[test]
    fn test_reset_drops_pending_result() {
        let mut effect = FetchEffect::new();

        let ticket = effect.trigger(5).unwrap();
        effect.reset();

        assert!(!effect.settle(&ticket));
        assert!(effect.trigger(5).is_some());
    }

    #[test]
    fn test_settle_twice() {
        let mut effect = FetchEffect::new();
        let ticket = effect.trigger(1).unwrap();

        assert!(effect.settle(&ticket));
        assert!(!effect.settle(&ticket));
    }
}
