use super::types::Comic;
use crate::config::Settings;
use crate::error::{Error, Result};

use std::future::Future;

/// Anything that can hand back the comic stored under an ID.
///
/// The fetch pipeline is written against this trait so it can be driven by
/// [`ComicClient`] in production and by in-memory sources in tests.
pub trait ComicSource: Send + Sync {
    fn fetch_comic(&self, id: i64) -> impl Future<Output = Result<Comic>> + Send;
}

/// HTTP client for `<endpoint><id><suffix>` documents.
pub struct ComicClient {
    http_client: reqwest::Client,
    endpoint: String,
    json_suffix: String,
}

impl ComicClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            http_client,
            endpoint: settings.endpoint.clone(),
            json_suffix: settings.json_suffix.clone(),
        })
    }

    pub fn comic_url(&self, id: i64) -> String {
        format!("{}{}{}", self.endpoint, id, self.json_suffix)
    }

    /// Issues one GET for `id` and succeeds only on a 200 response.
    ///
    /// The body is never read.
    pub async fn check_exists(&self, id: i64) -> Result<()> {
        let response = self
            .http_client
            .get(self.comic_url(id))
            .send()
            .await
            .map_err(|source| Error::Network { id, source })?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                id,
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

impl ComicSource for ComicClient {
    async fn fetch_comic(&self, id: i64) -> Result<Comic> {
        let url = self.comic_url(id);
        tracing::debug!("Fetching comic {} from {}", id, url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Network { id, source })?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                id,
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Network { id, source })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { id, source })
    }
}
