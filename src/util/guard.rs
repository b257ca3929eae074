//! Shared session-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect
//! behavior. The effect tracks the session signal, so logout or a failed
//! refresh re-triggers the redirect; it is not a one-time gate.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// True when the session has finished restoring and holds no valid
/// token pair.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session loses its tokens.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
