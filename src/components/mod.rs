//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs while reading/writing shared
//! state from Leptos context providers.

pub mod create_user_dialog;
pub mod delete_user_dialog;
pub mod edit_user_dialog;
pub mod header;
pub mod token_info_dialog;
pub mod user_table;
