//! Registered host hooks (analytics and crash reporting)
//!
//! Each hook can be registered once per SDK handle. Until one is registered,
//! every notification is a no-op.

use crate::error::{Error, Result};
use crate::model::SubmissionResult;
use crate::traits::{AnalyticsAdapter, CrashReporter, EventParams, events};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Fallback `address_type` when an address carries no `type` field
pub const UNKNOWN_ADDRESS_TYPE: &str = "unknown";

/// Optional host hooks shared by the SDK facade and the manager
#[derive(Default)]
pub struct SdkHooks {
    analytics: OnceLock<Arc<dyn AnalyticsAdapter>>,
    crash_reporter: OnceLock<Arc<dyn CrashReporter>>,
}

impl std::fmt::Debug for SdkHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkHooks")
            .field("analytics", &self.analytics.get().is_some())
            .field("crash_reporter", &self.crash_reporter.get().is_some())
            .finish()
    }
}

impl SdkHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the analytics adapter
    ///
    /// # Returns
    ///
    /// - `Err(Error::AlreadyInitialized)`: If an adapter is already registered
    pub fn set_analytics(&self, adapter: Arc<dyn AnalyticsAdapter>) -> Result<()> {
        self.analytics
            .set(adapter)
            .map_err(|_| Error::already_initialized("analytics adapter"))
    }

    /// Register the crash reporter
    pub fn set_crash_reporter(&self, reporter: Arc<dyn CrashReporter>) -> Result<()> {
        self.crash_reporter
            .set(reporter)
            .map_err(|_| Error::already_initialized("crash reporter"))
    }

    pub fn analytics(&self) -> Option<Arc<dyn AnalyticsAdapter>> {
        self.analytics.get().cloned()
    }

    pub fn crash_reporter(&self) -> Option<Arc<dyn CrashReporter>> {
        self.crash_reporter.get().cloned()
    }

    /// Forward an event to the analytics adapter, if any
    pub fn track(&self, name: &str, params: EventParams) {
        if let Some(adapter) = self.analytics.get() {
            debug!("Tracking analytics event {}", name);
            adapter.track_event(name, &params);
        }
    }

    /// Report the outcome of a validation pass
    pub fn record_validation(&self, field_count: usize, errors: &[String]) {
        if errors.is_empty() {
            self.track(
                events::VALIDATION_SUCCESS,
                params([("field_count", Value::from(field_count))]),
            );
        } else {
            self.track(
                events::VALIDATION_FAILED,
                params([
                    ("error_count", Value::from(errors.len())),
                    ("errors", Value::from(errors.join(", "))),
                ]),
            );
        }
    }

    /// Report one state of a submission stream
    pub fn record_submission(&self, address_type: &str, result: &SubmissionResult) {
        match result {
            SubmissionResult::Loading => self.track(
                events::SUBMISSION_STARTED,
                params([("address_type", Value::from(address_type))]),
            ),
            SubmissionResult::Success(response) => self.track(
                events::SUBMISSION_SUCCESS,
                params([
                    ("address_type", Value::from(address_type)),
                    ("response_id", Value::from(response.id)),
                    ("response_status", Value::from(response.status.clone())),
                ]),
            ),
            SubmissionResult::Error { message, code } => {
                let mut failed = params([
                    ("address_type", Value::from(address_type)),
                    ("error_message", Value::from(message.as_str())),
                ]);
                if let Some(code) = code {
                    failed.insert("error_code".to_string(), Value::from(*code));
                }
                self.track(events::SUBMISSION_FAILED, failed);
                self.report_failure(message, *code);
            }
        }
    }

    fn report_failure(&self, message: &str, code: Option<u16>) {
        let Some(reporter) = self.crash_reporter.get() else {
            return;
        };

        reporter.log(&format!("Address submission failed: {}", message));
        reporter.set_custom_key(
            "last_error_code",
            &code.map_or_else(|| "none".to_string(), |c| c.to_string()),
        );

        // Statusless failures only; the message is already prefixed
        if code.is_none() {
            reporter.log_exception(&Error::Other(message.to_string()));
        }
    }
}

/// The `address_type` analytics value for an address `type` field
pub fn address_type_label(address_type: Option<&str>) -> String {
    address_type.unwrap_or(UNKNOWN_ADDRESS_TYPE).to_string()
}

fn params<const N: usize>(pairs: [(&str, Value); N]) -> EventParams {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}
