//! Confirmation dialog for deleting a user record.

use leptos::prelude::*;

use crate::net::refresh::RefreshCoordinator;
use crate::net::types::User;
use crate::state::session::SessionState;

/// Delete confirmation. On success the caller re-fetches the list rather
/// than removing the row locally.
#[component]
pub fn DeleteUserDialog(
    user: User,
    on_cancel: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let coordinator = expect_context::<RefreshCoordinator>();

    let user_id = user.id;
    let display_name = user.username.clone().unwrap_or_else(|| format!("#{user_id}"));
    let error = RwSignal::new(String::new());
    let deleting = RwSignal::new(false);

    let submit = move |_| {
        if deleting.get() {
            return;
        }
        deleting.set(true);
        error.set(String::new());
        let coordinator = coordinator.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::authed::with_access_token(session, coordinator, |token| async move {
                    crate::net::api::delete_user(&token, user_id).await
                })
                .await;
            match result {
                Ok(()) => on_success.run(()),
                Err(message) => {
                    let _ = error.try_set(message);
                    let _ = deleting.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (coordinator, session);
            deleting.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete User"</h2>
                <p class="dialog__danger">
                    {format!("This will permanently delete \"{display_name}\".")}
                </p>

                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>

                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || deleting.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=move || deleting.get() on:click=submit>
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
