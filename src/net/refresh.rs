//! Single-flight access-token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two callers racing their own refreshes could each consume the stored
//! refresh token and invalidate the other's result. The coordinator
//! admits one leader per in-flight refresh; every other caller awaits the
//! leader's broadcast outcome instead of issuing a duplicate exchange.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Outcome broadcast to every caller of an in-flight refresh.
pub type RefreshOutcome = Result<(), String>;

/// Serializes refresh attempts: at most one network exchange in flight.
#[derive(Clone, Default)]
pub struct RefreshCoordinator {
    waiters: Arc<Mutex<Option<Vec<oneshot::Sender<RefreshOutcome>>>>>,
}

/// Role handed to a caller entering the refresh path.
pub enum RefreshTicket {
    /// This caller performs the network exchange and must call `complete`.
    Lead,
    /// A refresh is already in flight; await its outcome.
    Wait(oneshot::Receiver<RefreshOutcome>),
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the refresh path: the first caller leads, later callers wait.
    pub fn begin(&self) -> RefreshTicket {
        let mut waiters = self.waiters.lock().expect("refresh coordinator lock poisoned");
        match waiters.as_mut() {
            Some(list) => {
                let (tx, rx) = oneshot::channel();
                list.push(tx);
                RefreshTicket::Wait(rx)
            }
            None => {
                *waiters = Some(Vec::new());
                RefreshTicket::Lead
            }
        }
    }

    /// Broadcast the leader's outcome and close the in-flight window.
    pub fn complete(&self, outcome: &RefreshOutcome) {
        let drained = self
            .waiters
            .lock()
            .expect("refresh coordinator lock poisoned")
            .take()
            .unwrap_or_default();
        for waiter in drained {
            let _ = waiter.send(outcome.clone());
        }
    }

    /// Whether a refresh is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.waiters.lock().expect("refresh coordinator lock poisoned").is_some()
    }
}

/// Exchange the stored refresh token for a new access token.
///
/// Single-flight: concurrent callers share one network exchange. On
/// success the session is updated in one atomic write and persisted; on
/// failure the stored tokens are left untouched and the caller decides
/// whether that means a forced logout.
///
/// # Errors
///
/// Returns the display-ready failure message when there is no refresh
/// token or the exchange is rejected.
pub async fn refresh_session(
    session: RwSignal<SessionState>,
    coordinator: RefreshCoordinator,
) -> RefreshOutcome {
    match coordinator.begin() {
        RefreshTicket::Wait(rx) => {
            rx.await.unwrap_or_else(|_| Err("refresh abandoned".to_owned()))
        }
        RefreshTicket::Lead => {
            let outcome = lead_refresh(session).await;
            coordinator.complete(&outcome);
            outcome
        }
    }
}

async fn lead_refresh(session: RwSignal<SessionState>) -> RefreshOutcome {
    let Some(refresh_token) =
        session.get_untracked().refresh_token.filter(|t| !t.is_empty())
    else {
        return Err("no session to refresh".to_owned());
    };
    match crate::net::api::refresh_tokens(&refresh_token).await {
        Ok(tokens) => {
            session.update(|s| s.apply_refresh(tokens.access, tokens.refresh));
            session::persist(&session.get_untracked());
            Ok(())
        }
        Err(e) => {
            leptos::logging::warn!("token refresh failed: {e}");
            Err(e.to_string())
        }
    }
}
