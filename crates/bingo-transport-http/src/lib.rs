// # HTTP Transport
//
// reqwest-backed `AddressTransport` for the Bingo address SDK.
//
// ## Behavior
//
// - One POST per `post_json` call, no retries
// - Every status code is returned to the caller as a `TransportResponse`;
//   only connect/timeout/read failures become errors
// - Timeout and User-Agent come from `SdkConfig`
// - `close()` drops the client; later calls fail with `Error::TransportClosed`
//
// ## Usage
//
// ```rust,ignore
// use bingo_core::SdkConfig;
//
// let sdk = bingo_transport_http::http_sdk(SdkConfig::default())?;
// let mut results = sdk.add_home_address(&address);
// ```

use async_trait::async_trait;
use bingo_core::traits::{AddressTransport, TransportResponse};
use bingo_core::{BingoSdk, Error, Result, SdkConfig};
use reqwest::header::CONTENT_TYPE;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Transport name reported in logs
const TRANSPORT_NAME: &str = "reqwest";

/// HTTP transport over a shared reqwest client
pub struct HttpTransport {
    /// `None` once the transport is closed
    client: RwLock<Option<reqwest::Client>>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl HttpTransport {
    /// Build a transport from SDK configuration
    ///
    /// # Returns
    ///
    /// - `Ok(HttpTransport)`: Client built with the configured timeout and User-Agent
    /// - `Err(Error::Http)`: The client could not be built (e.g. TLS backend failure)
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }

    fn client(&self) -> Result<reqwest::Client> {
        let guard = self
            .client
            .read()
            .map_err(|_| Error::runtime("HTTP client lock poisoned"))?;
        guard.as_ref().cloned().ok_or(Error::TransportClosed)
    }
}

#[async_trait]
impl AddressTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse> {
        let client = self.client()?;

        debug!("POST {} ({} bytes)", url, body.len());

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e)))?;

        debug!("Response {} ({} bytes)", status, body.len());

        let response = TransportResponse::new(status.as_u16(), body);
        Ok(match status.canonical_reason() {
            Some(reason) => response.with_reason(reason),
            None => response,
        })
    }

    fn close(&self) {
        match self.client.write() {
            Ok(mut guard) => {
                guard.take();
            }
            Err(poisoned) => {
                poisoned.into_inner().take();
            }
        }
        info!("HTTP transport closed");
    }

    fn is_closed(&self) -> bool {
        match self.client.read() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }

    fn transport_name(&self) -> &'static str {
        TRANSPORT_NAME
    }
}

/// Build an SDK handle over a fresh [`HttpTransport`]
pub fn http_sdk(config: SdkConfig) -> Result<BingoSdk> {
    let transport = HttpTransport::from_config(&config)?;
    BingoSdk::new(config, Arc::new(transport))
}
