use crate::config::HttpConfig;
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use thiserror::Error;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// What came back from the server, whatever the status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx and 304 count as a successful save.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) || self.status == 304
    }

    pub fn reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs an urlencoded body to `action`. Non-2xx statuses are a
    /// `Response`, not an error.
    async fn post_form(&self, action: &str, body: String) -> Result<Response, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_tls)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolves a form `action` the way a browser would against the page URL.
    /// An empty action posts back to the base URL.
    pub fn resolve(&self, action: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(action)
            .map_err(|e| TransportError::InvalidUrl {
                url: action.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, action: &str, body: String) -> Result<Response, TransportError> {
        let url = self.resolve(action)?;
        tracing::debug!("POST {url} ({} bytes)", body.len());

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json, text/javascript, */*; q=0.01")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(Response { status, body })
    }
}
