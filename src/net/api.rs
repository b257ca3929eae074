//! REST API wrappers for the admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError`; callers turn it into a display
//! string at the view boundary, and only `Unauthorized` is acted on
//! programmatically (refresh or force logout, see `net::authed`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewUser, RefreshedTokens, TokenPair, User, UserUpdate};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn user_detail_endpoint(id: i64) -> String {
    format!("/api/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn otp_request_payload(identifier: &str) -> serde_json::Value {
    serde_json::json!({ "identifier": identifier })
}

#[cfg(any(test, feature = "hydrate"))]
fn otp_verify_payload(identifier: &str, code: &str) -> serde_json::Value {
    serde_json::json!({ "identifier": identifier, "code": code })
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_payload(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refresh": refresh_token })
}

/// Fresh correlation id attached to every request for backend log lookup.
#[cfg(feature = "hydrate")]
fn request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct RequestOtpResponse {
    ok: bool,
    code: Option<String>,
}

/// Request an OTP for `identifier` via `POST /api/auth/otp/request`.
///
/// Returns the code itself when the backend is configured to echo it
/// (development convenience).
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the backend rejects the
/// request (e.g. rate limited with a 429).
pub async fn request_otp(identifier: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/otp/request")
            .header("X-Request-Id", &request_id())
            .json(&otp_request_payload(identifier))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        let body: RequestOtpResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.ok {
            return Err(ApiError::Decode("request not accepted".to_owned()));
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identifier;
        Err(server_stub())
    }
}

/// Verify an OTP via `POST /api/auth/otp/verify`, yielding the token pair.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the code is rejected.
pub async fn verify_otp(identifier: &str, code: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/otp/verify")
            .header("X-Request-Id", &request_id())
            .json(&otp_verify_payload(identifier, code))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, code);
        Err(server_stub())
    }
}

/// Exchange a refresh token via `POST /api/auth/token/refresh`.
///
/// # Errors
///
/// Returns `Unauthorized` when the refresh token itself has expired.
pub async fn refresh_tokens(refresh_token: &str) -> Result<RefreshedTokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/token/refresh")
            .header("X-Request-Id", &request_id())
            .json(&refresh_payload(refresh_token))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(server_stub())
    }
}

/// Probe the access token via `GET /api/auth/token/verify`.
///
/// # Errors
///
/// Returns `Unauthorized` when the token is rejected.
pub async fn verify_access_token(access_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/token/verify")
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(server_stub())
    }
}

/// Best-effort backend logout via `POST /api/auth/logout`. The local
/// session is cleared regardless of what the backend answers.
pub async fn logout(access_token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
    }
}

/// Fetch the user directory via `GET /api/users`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn list_users(access_token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users")
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(server_stub())
    }
}

/// Create a user via `POST /api/users`.
///
/// # Errors
///
/// Returns an error if the request fails (e.g. duplicate username).
pub async fn create_user(access_token: &str, new_user: &NewUser) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users")
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .json(new_user)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, new_user);
        Err(server_stub())
    }
}

/// Update a user via `PUT /api/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails (e.g. record not found).
pub async fn update_user(
    access_token: &str,
    id: i64,
    update: &UserUpdate,
) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&user_detail_endpoint(id))
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .json(update)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, id, update);
        Err(server_stub())
    }
}

/// Delete a user via `DELETE /api/users/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_user(access_token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&user_detail_endpoint(id))
            .header("Authorization", &bearer(access_token))
            .header("X-Request-Id", &request_id())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, id);
        Err(server_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
