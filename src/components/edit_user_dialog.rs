//! Modal dialog for editing an existing user record.

use leptos::prelude::*;

use crate::net::refresh::RefreshCoordinator;
use crate::net::types::{User, UserUpdate};
use crate::state::session::SessionState;

/// Edit-user dialog, prefilled from the selected record. On success it
/// closes and the caller re-fetches the list; the edited copy itself is
/// never written into the local mirror.
#[component]
pub fn EditUserDialog(
    user: User,
    on_cancel: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let coordinator = expect_context::<RefreshCoordinator>();

    let user_id = user.id;
    let username = RwSignal::new(user.username.clone().unwrap_or_default());
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let phone = RwSignal::new(user.phone.clone().unwrap_or_default());
    let first_name = RwSignal::new(user.first_name.clone().unwrap_or_default());
    let last_name = RwSignal::new(user.last_name.clone().unwrap_or_default());
    let is_active = RwSignal::new(user.is_active);
    let error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let payload = UserUpdate::from_form(
            &username.get(),
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
                async move { crate::net::api::update_user(&token, user_id, &payload).await }
            })
            .await;
            match result {
                Ok(_) => on_success.run(()),
                Err(message) => {
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
                <h2>{format!("Edit User #{user_id}")}</h2>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
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
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
