//! User-directory list state.
//!
//! DESIGN
//! ======
//! The server owns user records; this list is a read-only mirror that is
//! discarded and re-fetched after every acknowledged mutation. Each fetch
//! is stamped with an issuance number and responses are applied in
//! issuance order, so a slow response can never overwrite the result of a
//! fetch issued after it.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

/// Mirrored user list plus fetch-ordering bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl UsersState {
    /// Start a list fetch and return its issuance number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.error = None;
        self.issued_seq
    }

    /// Apply a completed fetch. Returns false, changing nothing, when a
    /// later-issued fetch has already been applied.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<User>, String>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if seq == self.issued_seq {
            self.loading = false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            // A failed fetch keeps the previous items: stale but consistent.
            Err(message) => self.error = Some(message),
        }
        true
    }
}
