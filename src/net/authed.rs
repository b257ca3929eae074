//! Authorized-call combinator: bearer calls with one refresh retry.
//!
//! ERROR HANDLING
//! ==============
//! A 401 means the access token aged out. The combinator refreshes once
//! (single-flight) and retries the call; if the refresh itself fails there
//! is no recovery path left, so the session is cleared and the route guard
//! redirects to the login page.

use std::future::Future;

use leptos::prelude::*;

use super::error::ApiError;
use super::refresh::{RefreshCoordinator, refresh_session};
use crate::state::session::{self, SessionState};

/// Run `call` with the current access token, refreshing and retrying once
/// on a 401. Errors come back as display-ready strings.
///
/// # Errors
///
/// Returns an error when there is no session, the call fails for a
/// non-auth reason, or the refresh-and-retry path fails.
pub async fn with_access_token<T, C, Fut>(
    session: RwSignal<SessionState>,
    coordinator: RefreshCoordinator,
    call: C,
) -> Result<T, String>
where
    C: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(access) = current_access_token(&session.get_untracked()) else {
        return Err("not signed in".to_owned());
    };
    match call(access).await {
        Ok(value) => Ok(value),
        Err(e) if e.is_unauthorized() => {
            if let Err(refresh_err) = refresh_session(session, coordinator).await {
                // Expired refresh token: nothing left to retry with.
                session.update(SessionState::clear);
                session::persist(&session.get_untracked());
                return Err(refresh_err);
            }
            let Some(access) = current_access_token(&session.get_untracked()) else {
                return Err("not signed in".to_owned());
            };
            call(access).await.map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn current_access_token(state: &SessionState) -> Option<String> {
    state.access_token.clone().filter(|t| !t.is_empty())
}
