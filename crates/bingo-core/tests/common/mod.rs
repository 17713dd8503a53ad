//! Test doubles and common utilities for SDK contract tests
//!
//! The doubles record what the SDK does to them so tests can assert on call
//! counts and ordering without touching the network.

#![allow(dead_code)]

use bingo_core::error::{Error, Result};
use bingo_core::traits::{AddressTransport, AnalyticsAdapter, CrashReporter, EventParams};
use bingo_core::{BingoSdk, SdkConfig, TransportResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Endpoint URL the mock-backed SDK posts to
pub const TEST_BASE_URL: &str = "http://bingo.test";

/// What the mock transport does for one request
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Reply with a status and body
    Respond {
        status: u16,
        reason: Option<&'static str>,
        body: String,
    },
    /// Fail below HTTP (DNS, connect, timeout)
    Fail(String),
}

impl Scripted {
    pub fn ok(status: u16, body: &str) -> Self {
        Self::Respond {
            status,
            reason: None,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self::Respond {
            status,
            reason: Some(reason),
            body: String::new(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self::Fail(message.to_string())
    }
}

/// A transport that replays scripted outcomes and tracks calls
///
/// Once the script is exhausted every request gets `201 {}`.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    post_call_count: AtomicUsize,
    close_call_count: AtomicUsize,
    closed: AtomicBool,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn scripted(outcomes: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        let transport = Self::default();
        transport.script.lock().unwrap().extend(outcomes);
        Arc::new(transport)
    }

    /// Get the number of times post_json() was called
    pub fn post_call_count(&self) -> usize {
        self.post_call_count.load(Ordering::SeqCst)
    }

    /// Get the number of times close() was called
    pub fn close_call_count(&self) -> usize {
        self.close_call_count.load(Ordering::SeqCst)
    }

    /// Recorded `(url, body)` pairs, in request order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Body of the n-th request, parsed as JSON
    pub fn body_json(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        serde_json::from_str(&requests[index].1).expect("request body is JSON")
    }
}

#[async_trait::async_trait]
impl AddressTransport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse> {
        self.post_call_count.fetch_add(1, Ordering::SeqCst);

        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::TransportClosed);
        }

        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body));

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Respond {
                status,
                reason,
                body,
            }) => {
                let mut response = TransportResponse::new(status, body);
                if let Some(reason) = reason {
                    response = response.with_reason(reason);
                }
                Ok(response)
            }
            Some(Scripted::Fail(message)) => Err(Error::transport(message)),
            None => Ok(TransportResponse::new(201, "{}")),
        }
    }

    fn close(&self) {
        self.close_call_count.fetch_add(1, Ordering::SeqCst);
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}

/// An analytics adapter that records every call
#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<(String, EventParams)>>,
    user_ids: Mutex<Vec<String>>,
}

impl RecordingAnalytics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<(String, EventParams)> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.user_ids.lock().unwrap().clone()
    }
}

impl AnalyticsAdapter for RecordingAnalytics {
    fn track_event(&self, name: &str, params: &EventParams) {
        self.events
            .lock()
            .unwrap()
            .push((name.to_string(), params.clone()));
    }

    fn set_user_id(&self, id: &str) {
        self.user_ids.lock().unwrap().push(id.to_string());
    }

    fn set_user_property(&self, _key: &str, _value: &str) {}
}

/// A crash reporter that records every call
#[derive(Default)]
pub struct RecordingCrashReporter {
    pub exceptions: Mutex<Vec<String>>,
    pub logs: Mutex<Vec<String>>,
    pub keys: Mutex<Vec<(String, String)>>,
}

impl CrashReporter for RecordingCrashReporter {
    fn log_exception(&self, error: &(dyn std::error::Error + 'static)) {
        self.exceptions.lock().unwrap().push(error.to_string());
    }

    fn log(&self, message: &str) {
        self.logs.lock().unwrap().push(message.to_string());
    }

    fn set_custom_key(&self, key: &str, value: &str) {
        self.keys
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
    }
}

/// Helper to create an SDK handle over a mock transport
pub fn sdk_with(transport: Arc<MockTransport>) -> BingoSdk {
    BingoSdk::new(SdkConfig::new().with_base_url(TEST_BASE_URL), transport)
        .expect("sdk construction succeeds")
}

/// The address used throughout the contract tests
pub fn sample_address() -> bingo_core::Address {
    BingoSdk::create_address("1 Main", "NY", "NY", "10001", "USA")
}
