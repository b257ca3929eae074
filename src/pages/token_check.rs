//! Token probe page: validates the current access token on demand.

#[cfg(test)]
#[path = "token_check_test.rs"]
mod token_check_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::DashboardHeader;
use crate::net::refresh::RefreshCoordinator;
use crate::state::session::SessionState;
use crate::util::guard::install_unauth_redirect;

fn outcome_line(result: &Result<(), String>) -> (&'static str, String) {
    match result {
        Ok(()) => ("Success", "The access token was accepted by the backend.".to_owned()),
        Err(message) => ("Failed", message.clone()),
    }
}

/// Authenticated probe page with a single check action.
#[component]
pub fn TokenCheckPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let coordinator = expect_context::<RefreshCoordinator>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let checking = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Result<(), String>>);

    let check_coordinator = StoredValue::new(coordinator.clone());
    let on_check = move |_| {
        if checking.get() {
            return;
        }
        checking.set(true);
        outcome.set(None);
        let coordinator = check_coordinator.get_value();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::authed::with_access_token(session, coordinator, |token| async move {
                    crate::net::api::verify_access_token(&token).await
                })
                .await;
            // The page may have unmounted (forced logout) mid-probe.
            let _ = outcome.try_set(Some(result));
            let _ = checking.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = coordinator;
            checking.set(false);
        }
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="token-check-page">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            <div class="token-check-page">
                <DashboardHeader/>

                <main class="token-check-page__content">
                    <div class="token-check-page__card">
                        <h2>"Token Check"</h2>
                        <p class="token-check-page__hint">
                            "Sends an authenticated probe so you can confirm the current \
                             access token is still accepted."
                        </p>

                        <button
                            class="btn btn--primary token-check-page__run"
                            disabled=move || checking.get()
                            on:click=on_check
                        >
                            {move || if checking.get() { "Checking..." } else { "Check Token" }}
                        </button>

                        {move || {
                            outcome
                                .get()
                                .map(|result| {
                                    let (label, detail) = outcome_line(&result);
                                    let class = if result.is_ok() {
                                        "token-check-page__result token-check-page__result--ok"
                                    } else {
                                        "token-check-page__result token-check-page__result--err"
                                    };
                                    view! {
                                        <div class=class>
                                            <p class="token-check-page__result-label">{label}</p>
                                            <p>{detail}</p>
                                        </div>
                                    }
                                })
                        }}

                        <div class="token-check-page__tech">
                            <h3>"Technical notes"</h3>
                            <div class="token-check-page__tech-row">
                                <span>"Endpoint"</span>
                                <code>"/api/auth/token/verify"</code>
                            </div>
                            <div class="token-check-page__tech-row">
                                <span>"Method"</span>
                                <code>"GET"</code>
                            </div>
                            <div class="token-check-page__tech-row">
                                <span>"Authorization"</span>
                                <code>"Bearer token"</code>
                            </div>
                        </div>
                    </div>
                </main>
            </div>
        </Show>
    }
}
