//! HTTP client for the HealthIQ backend.
//!
//! ERROR HANDLING
//! ==============
//! Every response path funnels into `ApiError`. A 401 triggers one silent
//! refresh-and-replay; a request that 401s again after its replay gets the
//! plain status error back, so a bad token can never loop the interceptor.
//! Refresh failure is the only path that ends the session: tokens are
//! cleared and `SessionExpired` propagates for the surface to route back to
//! its login entry point.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::refresh::{RefreshCoordinator, RefreshOutcome, RefreshTicket};
use super::types::{ApiErrorBody, RefreshResponse};
use crate::auth::tokens::TokenStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{message}")]
    Validation {
        message: String,
        /// Field name to list of messages, as keyed by the backend.
        errors: HashMap<String, Vec<String>>,
    },
    #[error("session expired; log in again")]
    SessionExpired,
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Cheaply cloneable handle to the backend. Clones share the token store and
/// the refresh coordinator, so the single-flight guarantee spans all of them.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    refresh: Arc<RefreshCoordinator>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            store,
            refresh: Arc::new(RefreshCoordinator::new()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// `GET` returning a JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, &[], None).await
    }

    /// `GET` with query parameters.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    /// `POST` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, &[], Some(&body)).await
    }

    /// `POST` with no body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], None).await
    }

    /// `PUT` with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(&body)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let access = self.store.access_token();
        let response = self
            .send_once(&method, path, query, body, access.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return read_body(response).await;
        }

        // One refresh-and-replay per request. If the replay 401s again the
        // plain status error falls through below instead of looping.
        let refreshed = self.refresh_access_token().await?;
        let response = self
            .send_once(&method, path, query, body, Some(refreshed.as_str()))
            .await?;
        read_body(response).await
    }

    async fn send_once(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), url)
            .timeout(REQUEST_TIMEOUT);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(json) = body {
            request = request.json(json);
        }
        Ok(request.send().await?)
    }

    /// Obtain a fresh access token, collapsing concurrent callers into one
    /// underlying `/auth/refresh` call.
    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        match self.refresh.join() {
            RefreshTicket::Follower(rx) => match rx.await {
                Ok(RefreshOutcome::Refreshed(token)) => Ok(token),
                Ok(RefreshOutcome::Failed) | Err(_) => Err(ApiError::SessionExpired),
            },
            RefreshTicket::Leader => {
                let outcome = self.run_refresh().await;
                self.refresh.complete(&outcome);
                match outcome {
                    RefreshOutcome::Refreshed(token) => Ok(token),
                    RefreshOutcome::Failed => Err(ApiError::SessionExpired),
                }
            }
        }
    }

    /// Leader path: call `/auth/refresh` with the stored refresh token.
    /// Any failure clears the stored tokens.
    async fn run_refresh(&self) -> RefreshOutcome {
        let Some(refresh_token) = self.store.refresh_token() else {
            tracing::debug!("401 with no refresh token; clearing session");
            self.store.clear_tokens();
            return RefreshOutcome::Failed;
        };

        let url = format!("{}/auth/refresh", self.base_url);
        let result = self
            .http
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "token refresh request failed");
                self.store.clear_tokens();
                return RefreshOutcome::Failed;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "token refresh rejected");
            self.store.clear_tokens();
            return RefreshOutcome::Failed;
        }

        match response.json::<RefreshResponse>().await {
            Ok(body) => {
                // The refresh token does not rotate; store the pair back.
                self.store.set_tokens(&body.access, &refresh_token);
                tracing::debug!("access token refreshed");
                RefreshOutcome::Refreshed(body.access)
            }
            Err(error) => {
                tracing::warn!(error = %error, "token refresh response malformed");
                self.store.clear_tokens();
                RefreshOutcome::Failed
            }
        }
    }
}

async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        // Empty 2xx bodies decode as JSON null so unit-returning endpoints
        // don't need special casing.
        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(text)?)
    } else {
        Err(error_from_response(status.as_u16(), &body))
    }
}

/// Map a non-2xx body to the error taxonomy: a field-keyed validation map
/// when the backend sent one, a plain status error otherwise.
fn error_from_response(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(errors) = parsed.errors.filter(|map| !map.is_empty()) {
            let message = parsed
                .message
                .unwrap_or_else(|| "validation failed".to_owned());
            return ApiError::Validation { message, errors };
        }
        if let Some(message) = parsed.message {
            return ApiError::Status { status, message };
        }
    }

    let trimmed = body.trim();
    let message = if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_owned()
    };
    ApiError::Status { status, message }
}
