//! The network seam. Flows only see [`Fetch`], so they run the same against
//! the real backend and against canned responses.

use crate::errors::GlueError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GlueError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// A GET-only client. `Err` means no response arrived at all; a response
/// with any status is `Ok`.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, path: &str) -> Result<FetchResponse, GlueError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, path: &str) -> Result<FetchResponse, GlueError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}
