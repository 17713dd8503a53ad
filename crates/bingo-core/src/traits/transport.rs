// # Address Transport Trait
//
// Defines the interface for the HTTP client that carries a submission to the
// address service.
//
// ## Implementations
//
// - reqwest: `bingo-transport-http` crate
//
// ## Usage
//
// ```rust,ignore
// use bingo_core::AddressTransport;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let transport = /* AddressTransport implementation */;
//
//     let response = transport
//         .post_json("https://example.com/addaddress", r#"{"data":{}}"#.to_string())
//         .await?;
//     println!("{} {}", response.status, response.body);
//
//     transport.close();
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// A raw HTTP response as seen by the SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Reason phrase for the status (e.g. "Bad Request"), if known
    pub reason: Option<String>,
    /// Response body, decoded as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response with no reason phrase
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// Attach a reason phrase
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Human-readable description of the status
    pub fn description(&self) -> String {
        match &self.reason {
            Some(reason) => reason.clone(),
            None => format!("HTTP {}", self.status),
        }
    }
}

/// Trait for HTTP transport implementations
///
/// A transport is created once, shared by every submission issued through a
/// repository, and closed exactly once when the owner calls `cleanup()`.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Constraints
///
/// - One request per `post_json` call. No retries, no backoff.
/// - Any status code is a successful transport round-trip; status
///   interpretation belongs to [`crate::AddressApiService`].
/// - After `close()`, every `post_json` must fail with
///   [`crate::Error::TransportClosed`].
#[async_trait]
pub trait AddressTransport: Send + Sync {
    /// POST a JSON body to `url`
    ///
    /// # Parameters
    ///
    /// - `url`: Absolute endpoint URL
    /// - `body`: Serialized JSON, sent with `Content-Type: application/json`
    ///
    /// # Returns
    ///
    /// - `Ok(TransportResponse)`: A response was received (any status)
    /// - `Err(Error)`: Connect/timeout/read failure, or the transport is closed
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, crate::Error>;

    /// Release the underlying client's resources
    ///
    /// Idempotent at the trait level; the repository guarantees it is only
    /// invoked once.
    fn close(&self);

    /// Whether `close()` has been called
    fn is_closed(&self) -> bool;

    /// Get the transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
