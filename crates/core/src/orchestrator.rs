//! Search orchestrator: owns [`SearchState`] and moves it through
//! idle → loading → success | error, one request/response cycle per submit.
//!
//! There is no cancellation. Overlapping searches each resolve into the
//! state when they finish, so the last response to arrive wins.

use tracing::{debug, error, info};

use crate::api::SearchApi;
use crate::error::SearchError;
use crate::model::{Match, SearchState, SelectedFile};

/// Identifies one search attempt, handed out by [`SearchOrchestrator::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    state: SearchState,
    issued: u64,
    in_flight: usize,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Searches started but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Enter `Loading`, dropping any previous results or error.
    pub fn begin(&mut self) -> SearchTicket {
        self.issued += 1;
        self.in_flight += 1;
        self.state = SearchState::Loading;
        debug!(search = self.issued, in_flight = self.in_flight, "Search started");
        SearchTicket(self.issued)
    }

    /// Replace the state with the outcome of `ticket`'s request.
    pub fn resolve(&mut self, ticket: SearchTicket, outcome: Result<Vec<Match>, SearchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.seq() != self.issued {
            debug!(
                search = ticket.seq(),
                latest = self.issued,
                "Older search resolved after a newer one was started"
            );
        }

        self.state = match outcome {
            Ok(matches) => {
                info!(search = ticket.seq(), count = matches.len(), "Search succeeded");
                SearchState::Success(matches)
            }
            Err(e) => {
                error!(search = ticket.seq(), error = %e, "Search failed");
                SearchState::Error(e.user_message().to_string())
            }
        };
    }

    /// Run one full cycle against `api`.
    pub async fn search<A: SearchApi>(&mut self, api: &A, file: SelectedFile) -> &SearchState {
        let ticket = self.begin();
        let outcome = api.find_similar(file).await;
        self.resolve(ticket, outcome);
        &self.state
    }
}
