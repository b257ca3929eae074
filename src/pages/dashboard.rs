//! Dashboard page: the user directory with create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the user list on
//! entry and re-fetches after every acknowledged mutation; the local
//! mirror is never patched in place.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::create_user_dialog::CreateUserDialog;
use crate::components::delete_user_dialog::DeleteUserDialog;
use crate::components::edit_user_dialog::EditUserDialog;
use crate::components::header::DashboardHeader;
use crate::components::user_table::UserTable;
use crate::net::refresh::RefreshCoordinator;
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::state::users::UsersState;
use crate::util::guard::install_unauth_redirect;

fn users_summary(count: usize) -> String {
    if count == 1 {
        "1 user".to_owned()
    } else {
        format!("{count} users")
    }
}

/// Dashboard page: user table plus CRUD dialogs.
/// Redirects to `/login` whenever the session loses its tokens.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let coordinator = expect_context::<RefreshCoordinator>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let reload_coordinator = coordinator.clone();
    let reload = Callback::new(move |_: ()| {
        let Some(seq) = users.try_update(UsersState::begin_fetch) else {
            return;
        };
        let coordinator = reload_coordinator.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result =
                crate::net::authed::with_access_token(session, coordinator, |token| async move {
                    crate::net::api::list_users(&token).await
                })
                .await;
            users.update(|u| {
                u.apply_fetch(seq, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, coordinator);
        }
    });

    // Fetch once, as soon as the restored session is usable.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        if !session.get().is_authenticated() {
            return;
        }
        reload.run(());
        requested_list.set(true);
    });

    // Dialog state.
    let show_create = RwSignal::new(false);
    let edit_target = RwSignal::new(None::<User>);
    let delete_target = RwSignal::new(None::<User>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_create_success = Callback::new(move |_| {
        show_create.set(false);
        reload.run(());
    });
    let on_edit = Callback::new(move |user: User| edit_target.set(Some(user)));
    let on_edit_cancel = Callback::new(move |_| edit_target.set(None));
    let on_edit_success = Callback::new(move |_| {
        edit_target.set(None);
        reload.run(());
    });
    let on_delete = Callback::new(move |user: User| delete_target.set(Some(user)));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));
    let on_delete_success = Callback::new(move |_| {
        delete_target.set(None);
        reload.run(());
    });

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <DashboardHeader/>

                <main class="dashboard-page__content">
                    <div class="dashboard-page__card">
                        <div class="dashboard-page__card-header">
                            <div>
                                <h2>"User Management"</h2>
                                <p class="dashboard-page__summary">
                                    {move || users_summary(users.get().items.len())}
                                </p>
                            </div>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| show_create.set(true)
                            >
                                "+ New User"
                            </button>
                        </div>

                        <Show when=move || users.get().error.is_some()>
                            <div class="dashboard-page__error">
                                <p>{move || users.get().error.unwrap_or_default()}</p>
                                <button class="btn" on:click=move |_| reload.run(())>
                                    "Retry"
                                </button>
                            </div>
                        </Show>

                        <Show
                            when=move || !users.get().loading
                            fallback=move || view! { <p>"Loading users..."</p> }
                        >
                            <Show
                                when=move || !users.get().items.is_empty()
                                fallback=move || {
                                    view! {
                                        <div class="dashboard-page__empty">
                                            <p>"No users yet."</p>
                                            <button
                                                class="btn"
                                                on:click=move |_| show_create.set(true)
                                            >
                                                "+ Add the first user"
                                            </button>
                                        </div>
                                    }
                                }
                            >
                                <UserTable users=users on_edit=on_edit on_delete=on_delete/>
                            </Show>
                        </Show>
                    </div>
                </main>

                <Show when=move || show_create.get()>
                    <CreateUserDialog on_cancel=on_create_cancel on_success=on_create_success/>
                </Show>
                {move || {
                    edit_target
                        .get()
                        .map(|user| {
                            view! {
                                <EditUserDialog
                                    user=user
                                    on_cancel=on_edit_cancel
                                    on_success=on_edit_success
                                />
                            }
                        })
                }}
                {move || {
                    delete_target
                        .get()
                        .map(|user| {
                            view! {
                                <DeleteUserDialog
                                    user=user
                                    on_cancel=on_delete_cancel
                                    on_success=on_delete_success
                                />
                            }
                        })
                }}
            </div>
        </Show>
    }
}
