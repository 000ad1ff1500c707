// src/store/rest.rs
use super::{DocumentStore, StorePath};
use crate::errors::StoreError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("property-portfolio/", env!("CARGO_PKG_VERSION"));

/// Client for a REST-exposed document database.
///
/// Every path maps to `{base}/{path}.json`; a JSON `null` body means nothing is
/// stored there. The optional token is passed as the `auth` query parameter.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl RestStore {
    pub fn new(base_url: &str, auth_token: Option<String>) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Config(format!("invalid store URL {base_url:?}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(StoreError::Config(format!(
                "store URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            auth_token,
        })
    }

    /// Full request URL for a store path. Segments are percent-encoded, so
    /// state names with spaces survive intact.
    pub fn url_for(&self, path: &StorePath) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::Config("store URL cannot carry a path".into()))?;
            segments.pop_if_empty();

            match path.segments().split_last() {
                Some((last, parents)) => {
                    segments.extend(parents);
                    segments.push(&format!("{last}.json"));
                }
                None => {
                    segments.push(".json");
                }
            }
        }

        if let Some(token) = &self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }

        Ok(url)
    }
}

/// Turns a non-success status into `StoreError::Remote`, keeping the body.
async fn check_status(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "(no body)".to_string());

    Err(StoreError::Remote {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn read(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        debug!(%path, "rest read");
        let url = self.url_for(path)?;

        let resp = self.client.get(url).send().await?;
        let text = check_status(resp).await?.text().await?;

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| StoreError::Decode(format!("read {path}: {e}")))?;

        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn write(&self, path: &StorePath, value: &Value) -> Result<(), StoreError> {
        debug!(%path, "rest write");
        let url = self.url_for(path)?;

        let resp = self.client.put(url).json(value).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}
