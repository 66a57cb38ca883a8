//! Debounced live search
//!
//! Each request takes a [`Ticket`] from a shared [`RequestSequencer`]. A request whose ticket is
//! no longer the latest when its debounce window ends is never sent, and a response whose ticket
//! went stale while it was in flight is dropped. Only the newest request can update the list.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use hotelier::hotels::HotelRecord;
use tokio::time::sleep;
use tracing::debug;

use crate::api::{ApiError, HotelsApi, ListHotelsQuery};

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Sequence number of one list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Issue a ticket newer than every ticket issued before.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst).saturating_add(1))
    }

    /// Whether no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Result of one live search request.
#[derive(Debug)]
pub enum SearchOutcome {
    /// A newer request was issued; the list must not change.
    Superseded,

    /// The latest request finished.
    Completed(Result<Vec<HotelRecord>, ApiError>),
}

/// List requests sequenced so that late responses never overwrite newer ones.
#[derive(Clone)]
pub struct LiveSearch {
    api: Arc<dyn HotelsApi>,
    sequencer: Arc<RequestSequencer>,
    debounce: Duration,
}

impl Debug for LiveSearch {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LiveSearch")
            .field("sequencer", &self.sequencer)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl LiveSearch {
    /// Live search over `api` waiting `debounce` before each request.
    pub fn new(api: Arc<dyn HotelsApi>, debounce: Duration) -> Self {
        Self {
            api,
            sequencer: Arc::new(RequestSequencer::default()),
            debounce,
        }
    }

    /// Wait out the debounce window, then list hotels unless a newer request was issued.
    pub async fn run(&self, query: ListHotelsQuery) -> SearchOutcome {
        let ticket = self.sequencer.issue();

        sleep(self.debounce).await;

        if !self.sequencer.is_current(ticket) {
            debug!(ticket = ticket.get(), "search superseded before sending");

            return SearchOutcome::Superseded;
        }

        self.fetch(ticket, query).await
    }

    /// List hotels now, superseding any pending search.
    pub async fn immediate(&self, query: ListHotelsQuery) -> SearchOutcome {
        let ticket = self.sequencer.issue();

        self.fetch(ticket, query).await
    }

    async fn fetch(&self, ticket: Ticket, query: ListHotelsQuery) -> SearchOutcome {
        let result = self.api.list_hotels(query).await;

        if !self.sequencer.is_current(ticket) {
            debug!(ticket = ticket.get(), "dropping stale search response");

            return SearchOutcome::Superseded;
        }

        SearchOutcome::Completed(result)
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use crate::api::MockHotelsApi;

    use super::*;

    #[test]
    fn tickets_increase_and_only_latest_is_current() {
        let sequencer = RequestSequencer::default();

        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_debounce_before_sending() {
        let mut api = MockHotelsApi::new();

        api.expect_list_hotels()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let search = LiveSearch::new(Arc::new(api), SEARCH_DEBOUNCE);
        let started = Instant::now();

        let outcome = search.run(ListHotelsQuery::default()).await;

        assert!(started.elapsed() >= SEARCH_DEBOUNCE);
        assert!(matches!(outcome, SearchOutcome::Completed(Ok(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_send_one_request() {
        let mut api = MockHotelsApi::new();

        api.expect_list_hotels()
            .withf(|query| query.search.as_deref() == Some("miami"))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let search = LiveSearch::new(Arc::new(api), SEARCH_DEBOUNCE);

        let query = |term: &str| ListHotelsQuery {
            search: Some(term.to_string()),
            ..ListHotelsQuery::default()
        };

        let (first, second, third) = tokio::join!(
            search.run(query("m")),
            search.run(query("mia")),
            search.run(query("miami")),
        );

        assert!(matches!(first, SearchOutcome::Superseded));
        assert!(matches!(second, SearchOutcome::Superseded));
        assert!(matches!(third, SearchOutcome::Completed(Ok(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_request_supersedes_pending_search() {
        let mut api = MockHotelsApi::new();

        api.expect_list_hotels()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let search = LiveSearch::new(Arc::new(api), SEARCH_DEBOUNCE);

        let (pending, refreshed) = tokio::join!(
            search.run(ListHotelsQuery::default()),
            search.immediate(ListHotelsQuery::default()),
        );

        assert!(matches!(pending, SearchOutcome::Superseded));
        assert!(matches!(refreshed, SearchOutcome::Completed(Ok(_))));
    }
}
