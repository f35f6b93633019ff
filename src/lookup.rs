//! Lookup view state machine
//!
//! Holds the query, the current result or error and the busy flag. It does no
//! I/O: `submit` hands back a [`Ticket`] naming the request to issue, and the
//! caller reports the outcome through `settle` with the same ticket. Only the
//! most recently issued ticket is applied, so a late response for an
//! abandoned query can never overwrite newer state.

use crate::backend::Pokemon;
use crate::error::LookupError;

/// A request the caller must perform on behalf of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    /// Lower-cased query, otherwise untouched.
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
    ShowingResult,
    ShowingError,
}

#[derive(Debug, Default)]
pub struct LookupView {
    query: String,
    result: Option<Pokemon>,
    busy: bool,
    error: Option<String>,
    latest: u64,
}

impl LookupView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&Pokemon> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::Busy
        } else if self.error.is_some() {
            Phase::ShowingError
        } else if self.result.is_some() {
            Phase::ShowingResult
        } else {
            Phase::Idle
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.query.is_empty()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Start a lookup for the current query.
    ///
    /// Returns `None` without touching state when the query is empty or a
    /// request is already outstanding.
    pub fn submit(&mut self) -> Option<Ticket> {
        if !self.can_submit() {
            return None;
        }

        self.result = None;
        self.error = None;
        self.busy = true;
        self.latest += 1;

        Some(Ticket {
            seq: self.latest,
            key: self.query.to_lowercase(),
        })
    }

    /// Whether `seq` is still the request the view is waiting on or showing.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }

    /// Apply the outcome of a request. Returns false if it was stale and dropped.
    pub fn settle(&mut self, seq: u64, outcome: Result<Pokemon, LookupError>) -> bool {
        if !self.is_current(seq) || !self.busy {
            tracing::debug!("Discarding stale lookup #{} (latest #{})", seq, self.latest);
            return false;
        }

        self.busy = false;
        match outcome {
            Ok(pokemon) => {
                tracing::info!("Lookup #{} found {}", seq, pokemon.name);
                self.result = Some(pokemon);
            }
            Err(err) => {
                tracing::warn!("Lookup #{} failed: {}", seq, err);
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Back to idle. Any outstanding request becomes stale.
    pub fn reset(&mut self) {
        self.query.clear();
        self.result = None;
        self.error = None;
        self.busy = false;
        self.latest += 1;
    }
}
