//! Display state of the home page: a search box over a grid of anime cards.
//!
//! The view only keeps state, rendering is up to the front end. Every fetch takes a
//! ticket when it starts. Under [`StalePolicy::DiscardStale`] a response that
//! finishes after a newer fetch was started is dropped, so a slow search can't
//! overwrite the results of a later one.

use std::{
    error::Error,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::{debug, error};

use crate::{
    backend::AnimeBackend,
    objects::{Anime, Envelope},
};

pub const LOAD_FAILED: &str = "Failed to load anime list";
pub const SEARCH_FAILED: &str = "Search failed";

/// What to do with a response when a newer fetch has been started since
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Only the most recently started fetch may touch the state.
    #[default]
    DiscardStale,
    /// Every response is applied, the last one to arrive wins.
    LastResolvedWins,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub animes: Vec<Anime>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            animes: Vec::new(),
            // the first fetch starts on mount
            loading: true,
            error: None,
            search_query: String::new(),
        }
    }
}

/// What the page shows
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a [Anime]),
}

impl ViewState {
    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            Phase::Loading
        } else if let Some(error) = &self.error {
            Phase::Failed(error)
        } else if self.animes.is_empty() {
            Phase::Empty
        } else {
            Phase::Ready(&self.animes)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FetchKind {
    CurrentSeason,
    Search,
}

impl FetchKind {
    fn failure_message(self) -> &'static str {
        match self {
            Self::CurrentSeason => LOAD_FAILED,
            Self::Search => SEARCH_FAILED,
        }
    }
}

/// How a finished fetch changes the list
#[derive(Debug)]
enum Outcome {
    Replace(Vec<Anime>),
    /// `success: false`, the list stays as it is
    Keep,
    Failed(String),
}

impl Outcome {
    fn from_result<T, E: Error>(
        result: Result<Envelope<T>, E>,
        on_missing_data: impl FnOnce() -> Outcome,
        into_list: impl FnOnce(T) -> Vec<Anime>,
    ) -> Self {
        match result {
            Err(e) => Self::Failed(e.to_string()),
            Ok(envelope) if !envelope.success => Self::Keep,
            Ok(Envelope { data: None, .. }) => on_missing_data(),
            Ok(Envelope { data: Some(data), .. }) => Self::Replace(into_list(data)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Ticket {
    seq: u64,
    kind: FetchKind,
}

#[derive(Default)]
struct Inner {
    state: ViewState,
    // sequence number of the most recently started fetch
    issued: u64,
}

pub struct HomeView<B> {
    backend: B,
    policy: StalePolicy,
    inner: Mutex<Inner>,
}

impl<B: AnimeBackend> HomeView<B> {
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, StalePolicy::default())
    }

    pub fn with_policy(backend: B, policy: StalePolicy) -> Self {
        Self {
            backend,
            policy,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    pub fn set_search_query(&self, query: &str) {
        self.lock().state.search_query = query.to_owned();
    }

    pub async fn mount(&self) {
        self.load_current_season().await;
    }

    pub async fn load_current_season(&self) {
        let ticket = self.begin(FetchKind::CurrentSeason);

        let result = self.backend.current_season().await;
        // the season payload is required once the backend reports success
        let outcome = Outcome::from_result(
            result,
            || Outcome::Failed("successful response without data".to_owned()),
            |data| data.current_season.into(),
        );

        self.finish(ticket, outcome);
    }

    /// Search for the stored query, or reload the current season when it is blank
    pub async fn submit_search(&self) {
        let query = self.lock().state.search_query.clone();
        self.search(&query).await;
    }

    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.load_current_season().await;
            return;
        }

        let ticket = self.begin(FetchKind::Search);

        let result = self.backend.search(query).await;
        // no results at all shows as an empty grid
        let outcome =
            Outcome::from_result(result, || Outcome::Replace(Vec::new()), Vec::from);

        self.finish(ticket, outcome);
    }

    fn begin(&self, kind: FetchKind) -> Ticket {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.state.loading = true;
        inner.state.error = None;

        Ticket {
            seq: inner.issued,
            kind,
        }
    }

    fn finish(&self, ticket: Ticket, outcome: Outcome) {
        let mut inner = self.lock();

        if self.policy == StalePolicy::DiscardStale && ticket.seq != inner.issued {
            debug!(
                ticket = ticket.seq,
                latest = inner.issued,
                "dropping stale response"
            );
            return;
        }

        match outcome {
            Outcome::Replace(animes) => inner.state.animes = animes,
            Outcome::Keep => {}
            Outcome::Failed(cause) => {
                let message = ticket.kind.failure_message();
                error!(error = %cause, "{message}");
                inner.state.error = Some(message.to_owned());
            }
        }

        inner.state.loading = false;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
