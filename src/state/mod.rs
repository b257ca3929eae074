//! Shared application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one concern: `session` is the single source of truth
//! for authentication, `users` mirrors the remote directory, `login` holds
//! the transient OTP flow, and `ui` keeps presentation chrome out of
//! domain state.

pub mod login;
pub mod session;
pub mod ui;
pub mod users;
