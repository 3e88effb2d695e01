use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::error::{RestError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ACCEPT_JSON: &str = "application/json;odata=nometadata";

/// Completed HTTP exchange: status code plus the raw body.
///
/// Non-2xx responses are still `Ok` at the transport level; callers decide
/// what a failing status means via [`SpResponse::ok`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpResponse {
    status: u16,
    body: Vec<u8>,
}

impl SpResponse {
    /// Create a response from a status code and body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a response whose body is the serialized JSON value.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// Return the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Return whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// The single HTTP capability the list browser needs from its host.
pub trait SpHttp: Send + Sync {
    /// Issue a `GET` against an absolute URL.
    ///
    /// Network failures resolve to [`RestError::Transport`]; any response,
    /// whatever its status, resolves to `Ok`.
    fn get(&self, url: &str) -> impl Future<Output = Result<SpResponse>> + Send;
}

/// `reqwest`-backed SharePoint client with optional bearer authentication.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    token: Option<Arc<SecretString>>,
}

impl RestClient {
    /// Build a client. `token` is sent as a bearer token when present.
    pub fn new(token: Option<SecretString>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RestError::Setup(err.to_string()))?;

        Ok(Self {
            http,
            token: token.map(Arc::new),
        })
    }
}

impl SpHttp for RestClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<SpResponse>> + Send {
        let mut request = self.http.get(url).header(ACCEPT, ACCEPT_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }
        let url = url.to_string();

        async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            log::debug!("GET {url} -> {status} ({} bytes)", body.len());
            Ok(SpResponse::new(status, body.to_vec()))
        }
    }
}
