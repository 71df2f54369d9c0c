//! Debounced country search.

use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::client::DashboardClient;
use crate::config::DEFAULT_SEARCH_DEBOUNCE;
use crate::error::Error;
use crate::model::CountrySummary;

/// Maximum number of hits shown.
pub const MAX_RESULTS: usize = 10;

/// Source of country search hits.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<CountrySummary>, Error>;
}

#[async_trait]
impl CountryLookup for DashboardClient {
    async fn search(&self, query: &str) -> Result<Vec<CountrySummary>, Error> {
        self.search_countries(query).await
    }
}

/// What the results panel should show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing typed, or dismissed.
    #[default]
    Idle,
    /// A lookup is pending.
    Searching,
    /// The lookup found nothing.
    Empty,
    Results(Vec<CountrySummary>),
    Failed(String),
}

/// Order hits the way the backend does: exact code match first, then names
/// starting with the query, then by name. Keeps at most [`MAX_RESULTS`].
pub fn rank_results(query: &str, mut results: Vec<CountrySummary>) -> Vec<CountrySummary> {
    let query = query.trim().to_lowercase();
    results.sort_by_cached_key(|country| {
        (
            Reverse(country.code.to_lowercase() == query),
            Reverse(country.name.to_lowercase().starts_with(&query)),
            country.name.clone(),
        )
    });
    results.truncate(MAX_RESULTS);
    results
}

/// Search-as-you-type over a [`CountryLookup`].
///
/// Each [`input`](CountrySearch::input) supersedes the previous one; the
/// lookup only runs once input has been quiet for the debounce delay.
/// Observers follow the state through [`subscribe`](CountrySearch::subscribe).
/// Dropping the search cancels any pending lookup.
///
/// Must be used from within a tokio runtime.
pub struct CountrySearch<L: CountryLookup + 'static> {
    lookup: Arc<L>,
    delay: Duration,
    state: watch::Sender<SearchState>,
    pending: Option<CancellationToken>,
}

impl<L: CountryLookup + 'static> CountrySearch<L> {
    /// Create a search with the default 300 ms debounce.
    pub fn new(lookup: L) -> Self {
        Self::with_delay(lookup, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_delay(lookup: L, delay: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            lookup: Arc::new(lookup),
            delay,
            state,
            pending: None,
        }
    }

    /// Watch the results panel state.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Handle a change of the search box text.
    pub fn input(&mut self, query: &str) {
        self.cancel_pending();

        let query = query.trim().to_string();
        if query.is_empty() {
            self.state.send_replace(SearchState::Idle);
            return;
        }
        self.state.send_replace(SearchState::Searching);

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let lookup = Arc::clone(&self.lookup);
        let state = self.state.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            debug!("Searching countries for {:?}", query);
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = lookup.search(&query) => result,
            };

            let next = match result {
                Ok(hits) if hits.is_empty() => SearchState::Empty,
                Ok(hits) => SearchState::Results(rank_results(&query, hits)),
                Err(e) => {
                    warn!("Country search for {:?} failed: {}", query, e);
                    SearchState::Failed(e.to_string())
                }
            };
            publish_unless_cancelled(&state, &token, next);
        });
    }

    /// Close the results panel, e.g. on a click outside the search widget.
    pub fn dismiss(&mut self) {
        self.cancel_pending();
        self.state.send_replace(SearchState::Idle);
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

/// Publish `next` unless `token` was cancelled. The check runs under the
/// channel lock, and `input` cancels before it writes `Searching`, so a
/// superseded lookup can never overwrite a newer state.
fn publish_unless_cancelled(
    state: &watch::Sender<SearchState>,
    token: &CancellationToken,
    next: SearchState,
) -> bool {
    state.send_if_modified(|current| {
        if token.is_cancelled() {
            return false;
        }
        *current = next;
        true
    })
}

impl<L: CountryLookup + 'static> Drop for CountrySearch<L> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<L: CountryLookup + 'static> std::fmt::Debug for CountrySearch<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountrySearch")
            .field("delay", &self.delay)
            .field("state", &*self.state.borrow())
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, code: &str) -> CountrySummary {
        CountrySummary {
            name: name.to_string(),
            code: code.to_string(),
            continent: None,
            region: None,
            happiness_score: None,
        }
    }

    #[test]
    fn test_rank_exact_code_then_prefix_then_name() {
        let ranked = rank_results(
            "tun",
            vec![
                country("Fortuna", "FTN"),
                country("Tunisia", "TN"),
                country("Atuna", "TUN"),
                country("Tunland", "TL"),
            ],
        );
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Atuna", "Tunisia", "Tunland", "Fortuna"]);
    }

    #[test]
    fn test_cancelled_lookup_does_not_publish() {
        let (state, rx) = watch::channel(SearchState::Searching);
        let token = CancellationToken::new();
        token.cancel();

        assert!(!publish_unless_cancelled(&state, &token, SearchState::Empty));
        assert_eq!(*rx.borrow(), SearchState::Searching);

        let live = CancellationToken::new();
        assert!(publish_unless_cancelled(&state, &live, SearchState::Empty));
        assert_eq!(*rx.borrow(), SearchState::Empty);
    }

    #[test]
    fn test_rank_truncates() {
        let hits = (0..15).map(|i| country(&format!("Land {:02}", i), "XX")).collect();
        assert_eq!(rank_results("land", hits).len(), MAX_RESULTS);
    }
}
