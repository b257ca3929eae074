//! Shared header for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the account actions that operate on the session: token info,
//! manual token refresh, and logout. Logout clears the session
//! unconditionally; the route guard handles the redirect.

use leptos::prelude::*;

use crate::components::token_info_dialog::TokenInfoDialog;
use crate::net::refresh::RefreshCoordinator;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Top toolbar with navigation, dark-mode toggle, and account actions.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let coordinator = expect_context::<RefreshCoordinator>();

    let show_token_dialog = RwSignal::new(false);
    let refreshing = RwSignal::new(false);
    let refresh_note = RwSignal::new(String::new());

    let on_token_dialog_close = Callback::new(move |_| show_token_dialog.set(false));

    let refresh_coordinator = coordinator.clone();
    let on_refresh = move |_| {
        if refreshing.get() {
            return;
        }
        refreshing.set(true);
        refresh_note.set(String::new());
        let coordinator = refresh_coordinator.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let note = match crate::net::refresh::refresh_session(session, coordinator).await {
                Ok(()) => "Token refreshed.".to_owned(),
                Err(e) => e,
            };
            // The header may have unmounted (logout) while refreshing.
            let _ = refresh_note.try_set(note);
            let _ = refreshing.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (coordinator, session);
            refreshing.set(false);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                // Best-effort backend invalidation; the local session is
                // cleared no matter what the backend answers.
                let access = session.get_untracked().access_token.unwrap_or_default();
                crate::net::api::logout(&access).await;
                session.update(SessionState::clear);
                crate::state::session::persist(&session.get_untracked());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Admin Console"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <a class="btn toolbar__nav" href="/">
                "Users"
            </a>
            <a class="btn toolbar__nav" href="/token-check">
                "Token Check"
            </a>

            <span class="toolbar__spacer"></span>

            <Show when=move || !refresh_note.get().is_empty()>
                <span class="toolbar__note">{move || refresh_note.get()}</span>
            </Show>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <button
                class="btn toolbar__token-info"
                on:click=move |_| show_token_dialog.set(true)
                title="Show session tokens"
            >
                "Token Info"
            </button>

            <button
                class="btn toolbar__refresh"
                on:click=on_refresh
                disabled=move || refreshing.get()
                title="Refresh access token"
            >
                {move || if refreshing.get() { "Refreshing..." } else { "Refresh Token" }}
            </button>

            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
        <Show when=move || show_token_dialog.get()>
            <TokenInfoDialog on_close=on_token_dialog_close/>
        </Show>
    }
}
