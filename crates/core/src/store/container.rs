//! The state container views hold on to.
//!
//! A [`Store`] owns the current snapshot and is the only place a new one is
//! produced. Snapshots are shared as `Arc<AppState>`: a reader that took a
//! snapshot keeps a complete, unchanging state even after later dispatches.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::action::Action;
use super::checked::{RejectedAction, try_transition};
use super::reducer::transition;
use super::state::AppState;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Owner of the console state.
pub struct Store {
    current: Arc<AppState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Create a store starting from `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            current: Arc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store starting from [`AppState::seeded`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(AppState::seeded())
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.current
    }

    /// Take a shared handle to the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.current)
    }

    /// Apply `action` with [`transition`] and return the resulting snapshot.
    ///
    /// When the action changes nothing the current snapshot is kept and
    /// listeners are not called.
    pub fn dispatch(&mut self, action: Action) -> Arc<AppState> {
        let kind = action.kind();
        let next = transition(&self.current, action);
        self.replace(kind, next)
    }

    /// Apply `action` with [`try_transition`].
    ///
    /// # Errors
    ///
    /// Returns the [`RejectedAction`] and leaves the current snapshot in place
    /// when the action is refused.
    pub fn try_dispatch(&mut self, action: Action) -> Result<Arc<AppState>, RejectedAction> {
        let kind = action.kind();
        match try_transition(&self.current, action) {
            Ok(next) => Ok(self.replace(kind, next)),
            Err(error) => {
                warn!(action = kind, %error, "Action rejected");
                Err(error)
            }
        }
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, kind: &'static str, next: AppState) -> Arc<AppState> {
        if next == *self.current {
            debug!(action = kind, "Action left state unchanged");
            return self.snapshot();
        }

        debug!(
            action = kind,
            dates = next.workshop_dates.len(),
            times = next.workshop_times.len(),
            authenticated = next.session.authenticated,
            "Action applied"
        );

        self.current = Arc::new(next);
        for (_, listener) in &mut self.listeners {
            listener(self.current.as_ref());
        }
        self.snapshot()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
