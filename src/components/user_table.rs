//! User directory table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the mirrored user list; all edits go through dialogs and the
//! backend, never through local mutation.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::users::UsersState;

fn field_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "-".to_owned(),
    }
}

fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// Table of user records with per-row edit and delete actions.
#[component]
pub fn UserTable(
    users: RwSignal<UsersState>,
    on_edit: Callback<User>,
    on_delete: Callback<User>,
) -> impl IntoView {
    view! {
        <div class="user-table__wrap">
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"First Name"</th>
                        <th>"Last Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .items
                            .into_iter()
                            .map(|user| {
                                let edit_user = user.clone();
                                let delete_user = user.clone();
                                let status_class = if user.is_active {
                                    "user-table__badge user-table__badge--active"
                                } else {
                                    "user-table__badge user-table__badge--inactive"
                                };
                                view! {
                                    <tr>
                                        <td class="user-table__mono">{user.id}</td>
                                        <td>{field_or_dash(user.username.as_deref())}</td>
                                        <td class="user-table__mono">
                                            {field_or_dash(user.email.as_deref())}
                                        </td>
                                        <td>{field_or_dash(user.first_name.as_deref())}</td>
                                        <td>{field_or_dash(user.last_name.as_deref())}</td>
                                        <td>
                                            <span class=status_class>
                                                {status_label(user.is_active)}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="user-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_edit.run(edit_user.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        on_delete.run(delete_user.clone())
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
