//! Client for the external similarity API.
//!
//! `POST <endpoint>` with a multipart body carrying the image under the
//! [`IMAGE_FIELD`] key. A 2xx response is a JSON array of [`Match`] objects,
//! already ranked by the server; anything else is a [`SearchError`].

use std::future::Future;

use reqwest::multipart;
use tracing::{debug, info};

use crate::config::{ApiConfig, IMAGE_FIELD};
use crate::error::SearchError;
use crate::model::{Match, SelectedFile};

/// The one capability the orchestrator needs from a backend.
pub trait SearchApi {
    fn find_similar(
        &self,
        file: SelectedFile,
    ) -> impl Future<Output = Result<Vec<Match>, SearchError>> + Send;
}

/// [`SearchApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchApi {
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| SearchError::Transport {
            endpoint: config.endpoint.clone(),
            source,
        })?;
        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport(&self, source: reqwest::Error) -> SearchError {
        SearchError::Transport { endpoint: self.endpoint.clone(), source }
    }
}

impl SearchApi for HttpSearchApi {
    async fn find_similar(&self, file: SelectedFile) -> Result<Vec<Match>, SearchError> {
        let size = file.bytes.len();
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(file.kind.mime())
            .map_err(|e| self.transport(e))?;
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        info!(endpoint = %self.endpoint, file = %file.file_name, size, "Sending similarity search");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport(e))?;
        if !status.is_success() {
            return Err(SearchError::Status { status: status.as_u16(), body });
        }

        let matches = parse_matches(&body)?;
        debug!(count = matches.len(), "Similarity API responded");
        Ok(matches)
    }
}

/// Decode a response body. The array order is the ranking and is kept as-is.
pub fn parse_matches(body: &str) -> Result<Vec<Match>, SearchError> {
    Ok(serde_json::from_str(body)?)
}
