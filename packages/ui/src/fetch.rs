//! "Latest request wins" fetching.
//!
//! Every [`LatestFetch::run`] issues a new [`Ticket`] and cancels the task of
//! the previous run. A result is only written if its ticket is still the
//! newest, so a slow early response can never overwrite a later one. The
//! tasks belong to the calling component's scope and are dropped with it.
//!
//! A failure that means the credentials were rejected also ends the session
//! through the [`SessionExpiry`] in context, if there is one.

use std::future::Future;

use api::ApiError;
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::auth::SessionExpiry;

/// Monotonic request counter.
#[derive(Debug, Default, Clone)]
pub struct Generation {
    current: u64,
}

/// Proof of which request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    /// Issue a ticket; every earlier ticket becomes stale.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

/// State of an async value displayed by a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

/// Handle returned by [`use_latest_fetch`]. `Copy`, so it can be moved into
/// any number of event handlers.
pub struct LatestFetch<T: 'static> {
    state: Signal<Loadable<T>>,
    generation: CopyValue<Generation>,
    task: CopyValue<Option<Task>>,
    expiry: Option<SessionExpiry>,
}

impl<T: 'static> Clone for LatestFetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LatestFetch<T> {}

impl<T: 'static> LatestFetch<T> {
    pub fn state(&self) -> Signal<Loadable<T>> {
        self.state
    }

    /// Start `fut`, superseding whatever run is still in flight.
    pub fn run<F>(&mut self, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.generation.write().issue();
        if let Some(previous) = self.task.write().take() {
            previous.cancel();
        }

        let mut state = self.state;
        let generation = self.generation;
        let expiry = self.expiry;
        state.set(Loadable::Loading);

        let task = spawn(async move {
            let result = fut.await;
            if !generation.read().is_current(ticket) {
                tracing::debug!("discarding stale response {ticket:?}");
                return;
            }
            if let Err(e) = &result {
                tracing::warn!("fetch failed: {e}");
                if let (true, Some(expiry)) = (e.is_auth(), expiry) {
                    expiry.expire();
                }
            }
            state.set(Loadable::from_result(result));
        });
        self.task.set(Some(task));
    }
}

pub fn use_latest_fetch<T: 'static>() -> LatestFetch<T> {
    let state = use_signal(Loadable::default);
    let generation = use_hook(|| CopyValue::new(Generation::default()));
    let task = use_hook(|| CopyValue::new(None));
    let expiry = try_use_context::<SessionExpiry>();
    LatestFetch {
        state,
        generation,
        task,
        expiry,
    }
}
