//! Session store for the authenticated token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is the user signed in". Pages read it
//! through a context-provided `RwSignal<SessionState>`; login, refresh,
//! and logout are the only writers, and each writes through one `update`
//! call so readers never observe a half-written token pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const SESSION_STORAGE_KEY: &str = "admin_console_session";

/// The current session: access/refresh token pair plus a boot flag.
///
/// `loading` starts true and flips false once the persisted session (if
/// any) has been restored, so route guards can tell "signed out" apart
/// from "not restored yet".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// State at application start, before restore has run.
    pub fn booting() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// True iff both tokens are present and non-empty.
    pub fn is_authenticated(&self) -> bool {
        non_empty(self.access_token.as_deref()) && non_empty(self.refresh_token.as_deref())
    }

    /// Commit a freshly issued token pair (login success or restore).
    pub fn establish(&mut self, access: String, refresh: String) {
        self.access_token = Some(access);
        self.refresh_token = Some(refresh);
        self.loading = false;
    }

    /// Commit a refreshed access token, keeping the old refresh token
    /// unless the backend rotated it.
    pub fn apply_refresh(&mut self, access: String, rotated_refresh: Option<String>) {
        self.access_token = Some(access);
        if let Some(refresh) = rotated_refresh {
            self.refresh_token = Some(refresh);
        }
    }

    /// Drop both tokens. Idempotent: clearing a cleared session is a no-op.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.loading = false;
    }
}

fn non_empty(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// Serialized token pair persisted to localStorage.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
}

/// Persist the current token pair, or remove the stored copy when the
/// session is signed out.
pub fn persist(state: &SessionState) {
    if state.is_authenticated() {
        let stored = StoredSession {
            access_token: state.access_token.clone().unwrap_or_default(),
            refresh_token: state.refresh_token.clone().unwrap_or_default(),
        };
        storage::save_json(SESSION_STORAGE_KEY, &stored);
    } else {
        storage::remove(SESSION_STORAGE_KEY);
    }
}

/// Restore the persisted token pair. Empty or partial pairs are discarded
/// so a restored session always satisfies the authentication invariant.
pub fn restore() -> Option<(String, String)> {
    let stored: StoredSession = storage::load_json(SESSION_STORAGE_KEY)?;
    if stored.access_token.is_empty() || stored.refresh_token.is_empty() {
        return None;
    }
    Some((stored.access_token, stored.refresh_token))
}
