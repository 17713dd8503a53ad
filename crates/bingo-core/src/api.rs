//! Address API service
//!
//! Turns one submission into one lazy result stream:
//!
//! ```text
//!   poll ──► Loading ──► POST {endpoint} ──┬── 200/201 + body ──► Success(response)
//!                                          ├── other status ────► Error { message, Some(code) }
//!                                          └── transport/parse ─► Error { message, None }
//!
//! A 200/201 whose body is empty or not a JSON object counts as a parse failure.
//! ```
//!
//! ## Guarantees
//!
//! 1. Nothing is sent until the stream is polled
//! 2. `Loading` is always the first item
//! 3. Exactly one terminal item follows, then the stream ends
//! 4. One request per stream; no retry on failure
//!
//! Dropping the stream before the terminal item cancels the in-flight request.

use crate::address::{Address, RawJson};
use crate::error::Error;
use crate::model::{AddAddressRequest, AddAddressResponse, ApiResult, SubmissionResult};
use crate::traits::{AddressTransport, TransportResponse};
use futures::stream::{self, Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lazy, single-consumer stream of submission states
pub type ResultStream = Pin<Box<dyn Stream<Item = SubmissionResult> + Send + 'static>>;

/// Issues add-address requests and maps responses to [`ApiResult`]s
#[derive(Clone)]
pub struct AddressApiService {
    /// Shared transport (owned by the repository)
    transport: Arc<dyn AddressTransport>,

    /// Absolute URL of the add-address endpoint
    endpoint_url: String,
}

impl fmt::Debug for AddressApiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressApiService")
            .field("transport", &self.transport.transport_name())
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl AddressApiService {
    /// Create a new API service
    ///
    /// # Parameters
    ///
    /// - `transport`: Transport used for every request
    /// - `endpoint_url`: Absolute URL of the add-address endpoint
    pub fn new(transport: Arc<dyn AddressTransport>, endpoint_url: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint_url: endpoint_url.into(),
        }
    }

    /// The endpoint every request is sent to
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Submit a structured address as `{"data": {...}}`
    pub fn add_address(&self, address: &Address) -> ResultStream {
        let body = serde_json::to_string(&AddAddressRequest::new(address)).map_err(Error::from);
        self.submit(body)
    }

    /// Submit a caller-serialized JSON body verbatim
    pub fn add_address_raw(&self, json: RawJson) -> ResultStream {
        self.submit(Ok(json.into_string()))
    }

    fn submit(&self, body: Result<String, Error>) -> ResultStream {
        let transport = Arc::clone(&self.transport);
        let url = self.endpoint_url.clone();

        let terminal = async move {
            match body {
                Ok(body) => send_once(transport.as_ref(), &url, body).await,
                Err(e) => network_error(&e),
            }
        };

        Box::pin(stream::iter([ApiResult::Loading]).chain(stream::once(terminal)))
    }
}

/// Perform the single POST for a submission and classify the outcome
async fn send_once(transport: &dyn AddressTransport, url: &str, body: String) -> SubmissionResult {
    info!("POST {} ({} bytes) via {}", url, body.len(), transport.transport_name());

    match transport.post_json(url, body).await {
        Ok(response) => {
            info!("Response from {}: {}", url, response.status);
            interpret_response(response)
        }
        Err(e) => {
            warn!("Address submission to {} failed: {}", url, e);
            network_error(&e)
        }
    }
}

/// Map a raw HTTP response to a terminal result
///
/// Only 200 and 201 count as success, and only when the body parses as a
/// JSON object. An empty success body is a parse failure.
pub fn interpret_response(response: TransportResponse) -> SubmissionResult {
    match response.status {
        200 | 201 => match serde_json::from_str::<AddAddressResponse>(&response.body) {
            Ok(parsed) => {
                debug!("Address accepted: id={:?} status={:?}", parsed.id, parsed.status);
                ApiResult::Success(parsed)
            }
            Err(e) => {
                warn!("Failed to parse success body: {}", e);
                network_error(&Error::from(e))
            }
        },
        status => {
            let description = response.description();
            warn!("Address service rejected submission: {} {}", status, description);
            ApiResult::error(format!("Failed to add address: {}", description), Some(status))
        }
    }
}

fn network_error(error: &Error) -> SubmissionResult {
    let cause = match error {
        Error::Transport(msg) => msg.clone(),
        other => other.to_string(),
    };
    ApiResult::error(format!("Network error: {}", cause), None)
}
