//! Tests for the debounced country search.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use econdash_lib::error::{ApiError, Error};
use econdash_lib::model::CountrySummary;
use econdash_lib::search::{CountryLookup, CountrySearch, SearchState};

#[derive(Clone, Default)]
struct FakeLookup {
    queries: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl FakeLookup {
    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountryLookup for FakeLookup {
    async fn search(&self, query: &str) -> Result<Vec<CountrySummary>, Error> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(ApiError::http(500, "An unexpected error occurred.").into());
        }
        let all = [("Tunisia", "TN"), ("Turkey", "TR"), ("Tuvalu", "TV")];
        Ok(all
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query.to_lowercase()))
            .map(|(name, code)| CountrySummary {
                name: name.to_string(),
                code: code.to_string(),
                continent: None,
                region: None,
                happiness_score: None,
            })
            .collect())
    }
}

fn settled(state: &SearchState) -> bool {
    !matches!(state, SearchState::Searching)
}

#[tokio::test(start_paused = true)]
async fn test_rapid_input_collapses_to_one_lookup() {
    let lookup = FakeLookup::default();
    let mut search = CountrySearch::new(lookup.clone());
    let mut rx = search.subscribe();

    search.input("t");
    tokio::time::sleep(Duration::from_millis(100)).await;
    search.input("tu");
    tokio::time::sleep(Duration::from_millis(100)).await;
    search.input("tun");
    assert_eq!(search.state(), SearchState::Searching);

    let state = rx.wait_for(settled).await.unwrap().clone();
    match state {
        SearchState::Results(hits) => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].code, "TN");
        }
        other => panic!("unexpected state {:?}", other),
    }
    assert_eq!(lookup.queries(), vec!["tun"]);
}

#[tokio::test(start_paused = true)]
async fn test_no_lookup_before_delay() {
    let lookup = FakeLookup::default();
    let mut search = CountrySearch::with_delay(lookup.clone(), Duration::from_millis(300));

    search.input("tur");
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(lookup.queries().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    let mut rx = search.subscribe();
    rx.wait_for(settled).await.unwrap();
    assert_eq!(lookup.queries(), vec!["tur"]);
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_clears_without_lookup() {
    let lookup = FakeLookup::default();
    let mut search = CountrySearch::new(lookup.clone());

    search.input("tu");
    search.input("   ");
    assert_eq!(search.state(), SearchState::Idle);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(lookup.queries().is_empty());
    assert_eq!(search.state(), SearchState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_empty_and_failed_states() {
    let lookup = FakeLookup::default();
    let mut search = CountrySearch::new(lookup);
    let mut rx = search.subscribe();

    search.input("zz");
    let state = rx.wait_for(settled).await.unwrap().clone();
    assert_eq!(state, SearchState::Empty);

    let failing = FakeLookup {
        fail: true,
        ..Default::default()
    };
    let mut search = CountrySearch::new(failing);
    let mut rx = search.subscribe();
    search.input("tun");
    let state = rx.wait_for(settled).await.unwrap().clone();
    assert!(matches!(state, SearchState::Failed(message) if message.contains("500")));
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_cancels_pending_lookup() {
    let lookup = FakeLookup::default();
    let mut search = CountrySearch::new(lookup.clone());

    search.input("tun");
    search.dismiss();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(search.state(), SearchState::Idle);
    assert!(lookup.queries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_lookup() {
    let lookup = FakeLookup::default();
    {
        let mut search = CountrySearch::new(lookup.clone());
        search.input("tun");
    }
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(lookup.queries().is_empty());
}
