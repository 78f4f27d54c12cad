//! HTTP implementation of the user directory.
//!
//! Thin JSON-over-HTTP calls; wire details (auth header, timeouts) come
//! from [`Config`]. Non-2xx responses are decoded from the server's error
//! body when one is present.

use crate::{
    config::Config,
    directory::{Ack, HouseAssignment, ObservationsUpdate, RoleUpdate, StatusUpdate, UserDirectory},
    error::{ClientError, Result},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use syndic_engine::{HouseNumber, Role, Status, User};

/// Error body returned by the directory service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Directory client over JSON/HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    http: reqwest::Client,
    api_url: String,
    auth_token: Option<String>,
}

impl HttpDirectory {
    /// Build a directory client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Turn a non-2xx response into a [`ClientError::Remote`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status.to_string());

        Err(ClientError::Remote {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let checked = Self::check(response).await?;
        checked
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<User>> {
        tracing::debug!("GET /users");
        let response = self.request(reqwest::Method::GET, "/users").send().await?;
        Self::decode(response).await
    }

    async fn update_role(&self, id: &str, role: Role) -> Result<User> {
        tracing::debug!(user = id, %role, "PATCH role");
        let response = self
            .request(reqwest::Method::PATCH, &format!("/users/{}/role", id))
            .json(&RoleUpdate { role })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<User> {
        tracing::debug!(user = id, %status, "PATCH status");
        let response = self
            .request(reqwest::Method::PATCH, &format!("/users/{}/status", id))
            .json(&StatusUpdate { status })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_observations(&self, id: &str, observations: Option<&str>) -> Result<User> {
        tracing::debug!(user = id, "PATCH observations");
        let response = self
            .request(reqwest::Method::PATCH, &format!("/users/{}/observations", id))
            .json(&ObservationsUpdate {
                observations: observations.map(str::to_string),
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn assign_house(&self, id: &str, house: HouseNumber) -> Result<Ack> {
        tracing::debug!(user = id, house, "POST house");
        let response = self
            .request(reqwest::Method::POST, &format!("/users/{}/houses", id))
            .json(&HouseAssignment { house })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn remove_house(&self, id: &str, house: HouseNumber) -> Result<Ack> {
        tracing::debug!(user = id, house, "DELETE house");
        let response = self
            .request(
                reqwest::Method::DELETE,
                &format!("/users/{}/houses/{}", id, house),
            )
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        tracing::debug!(user = id, "DELETE user");
        let response = self
            .request(reqwest::Method::DELETE, &format!("/users/{}", id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
