//! Loading/success/error state machine for pages that fetch one resource.
//!
//! ```text
//! Loading --ok--> Success
//!    |
//!    +--err--> Error --retry--> Loading
//! ```
//!
//! Every fetch is started with [`RemoteResource::begin`], which hands out a
//! [`FetchTicket`]. A result is only applied if the resource is still
//! mounted and the ticket is the most recent one, so a late response from a
//! superseded fetch (or one that lands after the page is gone) is dropped.

use log::{error, info};
use std::fmt::Display;

/// Message shown for any failed fetch; the cause is only logged.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong while loading this page.";

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Success(T),
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResource<T> {
    state: ResourceState<T>,
    generation: u64,
    mounted: bool,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RemoteResource<T> {
    pub fn new() -> Self {
        Self {
            state: ResourceState::Loading,
            generation: 0,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ResourceState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResourceState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, ResourceState::Error)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Enter `Loading` and issue a ticket for the new fetch.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ResourceState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Re-enter `Loading` from `Error`. Returns `None` in any other state.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.is_error() {
            info!("resource: retrying fetch");
            Some(self.begin())
        } else {
            None
        }
    }

    /// [`begin`](Self::begin), then build the fetch future for that ticket.
    /// The caller drives the future and hands its output to
    /// [`complete`](Self::complete).
    pub fn begin_with<F, Fut>(&mut self, fetch: F) -> (FetchTicket, Fut)
    where
        F: FnOnce() -> Fut,
    {
        let ticket = self.begin();
        (ticket, fetch())
    }

    /// [`retry`](Self::retry) and re-issue `fetch` under the new ticket.
    pub fn retry_with<F, Fut>(&mut self, fetch: F) -> Option<(FetchTicket, Fut)>
    where
        F: FnOnce() -> Fut,
    {
        let ticket = self.retry()?;
        Some((ticket, fetch()))
    }

    /// Apply a fetch result. Returns false when the result was dropped.
    pub fn complete<E: Display>(&mut self, ticket: FetchTicket, result: Result<T, E>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(data) => ResourceState::Success(data),
            Err(e) => {
                error!("resource: fetch failed: {}", e);
                ResourceState::Error
            }
        };
        true
    }

    /// Mark the owning page as gone; later completions are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

}
