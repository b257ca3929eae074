//! Login page: two-step OTP flow (request code, then verify it).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::login::{LoginFlow, LoginStep};
use crate::state::session::SessionState;

pub(crate) fn validate_identifier_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter an email or phone number first.");
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn validate_code_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.len() != 6 {
        return Err("Enter the 6-character code.");
    }
    Ok(trimmed.to_owned())
}

/// Login page with request-code and verify-code steps.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let flow = RwSignal::new(LoginFlow::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    // Already signed in (e.g. back navigation): skip the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let identifier = match validate_identifier_input(&flow.get().identifier) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_otp(&identifier).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    flow.update(|f| f.code_requested(identifier));
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identifier;
            busy.set(false);
        }
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let identifier = flow.get().identifier;
        let code = match validate_code_input(&flow.get().code) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&identifier, &code).await {
                Ok(tokens) => {
                    session.update(|s| s.establish(tokens.access, tokens.refresh));
                    crate::state::session::persist(&session.get_untracked());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    // Step stays at the code input so a corrected code can
                    // be resubmitted without a new OTP request.
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, code);
            busy.set(false);
        }
    };

    let on_change_identifier = move |_| {
        flow.update(LoginFlow::reset);
        error.set(String::new());
        echoed_code.set(None);
    };

    let at_code_step = move || flow.get().step == LoginStep::AwaitingCode;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Console"</h1>
                <p class="login-card__subtitle">
                    {move || {
                        if at_code_step() {
                            "Enter the code we sent you"
                        } else {
                            "Sign in with your email or phone number"
                        }
                    }}
                </p>
                <Show
                    when=at_code_step
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_request_code>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="you@example.com or 09123456789"
                                    prop:value=move || flow.get().identifier
                                    on:input=move |ev| {
                                        flow.update(|f| f.identifier = event_target_value(&ev));
                                    }
                                />
                                <button
                                    class="login-button"
                                    type="submit"
                                    disabled=move || busy.get()
                                >
                                    {move || if busy.get() { "Sending code..." } else { "Send Code" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_verify_code>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || flow.get().code
                            on:input=move |ev| {
                                flow.update(|f| f.code = event_target_value(&ev));
                            }
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Verifying..." } else { "Verify & Sign In" }}
                        </button>
                        <button
                            class="login-button login-button--ghost"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_change_identifier
                        >
                            "Use a different email or phone"
                        </button>
                    </form>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="login-message login-message--code">
                        "Code: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </div>
        </div>
    }
}
