//! Single-flight coordination for access-token refresh.
//!
//! DESIGN
//! ======
//! All clones of an `ApiClient` share one `RefreshCoordinator`. The first
//! request to see a 401 becomes the leader and performs the refresh call;
//! requests that 401 while it is in flight park as followers in a FIFO wait
//! list and are woken with the leader's outcome. The flag check-and-set
//! happens synchronously under one mutex acquisition, before any await, so
//! two leaders can never race into existence.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;

/// Result of a refresh attempt, broadcast to every parked follower.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RefreshOutcome {
    /// New access token; the refresh token is unchanged.
    Refreshed(String),
    /// Refresh failed or no refresh token existed; the session is over.
    Failed,
}

/// Position a request was granted when it asked to refresh.
pub(crate) enum RefreshTicket {
    /// This request performs the refresh and must call `complete`.
    Leader,
    /// A refresh is already in flight; await the outcome.
    Follower(oneshot::Receiver<RefreshOutcome>),
}

struct RefreshInner {
    refreshing: bool,
    waiters: VecDeque<oneshot::Sender<RefreshOutcome>>,
}

/// Process-wide mutable refresh state, held behind an `Arc` by every client
/// clone that should share a single refresh flight.
pub struct RefreshCoordinator {
    inner: Mutex<RefreshInner>,
}

impl RefreshCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RefreshInner { refreshing: false, waiters: VecDeque::new() }),
        }
    }

    /// Join the current refresh round. The first caller since the last
    /// `complete` becomes the leader; everyone else parks FIFO.
    pub(crate) fn join(&self) -> RefreshTicket {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.refreshing {
            let (tx, rx) = oneshot::channel();
            inner.waiters.push_back(tx);
            RefreshTicket::Follower(rx)
        } else {
            inner.refreshing = true;
            RefreshTicket::Leader
        }
    }

    /// Resolve the in-flight refresh: clear the flag and wake all parked
    /// followers in join order. Followers that gave up are skipped.
    pub(crate) fn complete(&self, outcome: &RefreshOutcome) {
        let waiters = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.refreshing = false;
            std::mem::take(&mut inner.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }

    /// Whether a refresh is currently in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .refreshing
    }
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
