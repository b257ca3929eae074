//! Modal dialog for creating a user record.

#[cfg(test)]
#[path = "create_user_dialog_test.rs"]
mod create_user_dialog_test;

use leptos::prelude::*;

use crate::net::refresh::RefreshCoordinator;
use crate::net::types::NewUser;
use crate::state::session::SessionState;

pub(crate) fn validate_new_user(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Username and password are required.");
    }
    Ok(())
}

/// Create-user dialog. On success it closes and the caller re-fetches the
/// list; on failure it stays open with the message inline.
#[component]
pub fn CreateUserDialog(on_cancel: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let coordinator = expect_context::<RefreshCoordinator>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let is_active = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        if let Err(message) = validate_new_user(&username.get(), &password.get()) {
            error.set(message.to_owned());
            return;
        }
        let payload = NewUser::from_form(
            &username.get(),
            &password.get(),
            &email.get(),
            &phone.get(),
            &first_name.get(),
            &last_name.get(),
            is_active.get(),
        );
        saving.set(true);
        error.set(String::new());
        let coordinator = coordinator.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::authed::with_access_token(session, coordinator, |token| {
                let payload = payload.clone();
                async move { crate::net::api::create_user(&token, &payload).await }
            })
            .await;
            match result {
                Ok(_) => on_success.run(()),
                Err(message) => {
                    // The dialog may already be gone if a failed refresh
                    // forced a logout while the request was in flight.
                    let _ = error.try_set(message);
                    let _ = saving.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, coordinator, session);
            saving.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--user" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create User"</h2>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "Username *"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password *"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "First Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Last Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__error">{move || error.get()}</p>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || saving.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
