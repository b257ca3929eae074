//! Local UI chrome state.
//!
//! Keeps presentation concerns out of domain state (`session`, `users`)
//! so rendering controls can evolve independently of protocol data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
