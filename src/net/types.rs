//! Wire-schema DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde owns
//! the boundary and views stay typed. The backend is the sole owner of
//! user records; nothing here is mutated locally.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as owned by the backend directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Inactive users keep their record but cannot sign in.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create payload. Username and password are required by the backend;
/// everything else is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

impl NewUser {
    /// Build a create payload from raw form inputs, normalizing blank
    /// optional fields to absent.
    pub fn from_form(
        username: &str,
        password: &str,
        email: &str,
        phone: &str,
        first_name: &str,
        last_name: &str,
        is_active: bool,
    ) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: password.to_owned(),
            email: optional_field(email),
            phone: optional_field(phone),
            first_name: optional_field(first_name),
            last_name: optional_field(last_name),
            is_active,
        }
    }
}

/// Update payload: the editable field set, without credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

impl UserUpdate {
    /// Build an update payload from raw form inputs, normalizing blank
    /// fields to absent.
    pub fn from_form(
        username: &str,
        email: &str,
        phone: &str,
        first_name: &str,
        last_name: &str,
        is_active: bool,
    ) -> Self {
        Self {
            username: optional_field(username),
            email: optional_field(email),
            phone: optional_field(phone),
            first_name: optional_field(first_name),
            last_name: optional_field(last_name),
            is_active,
        }
    }
}

/// Access/refresh token pair issued by OTP verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Refresh response: a new access token, plus a rotated refresh token
/// when the backend chooses to rotate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
