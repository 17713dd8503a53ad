// # Analytics Adapter Trait
//
// Optional hook receiving named usage events from the SDK. The host
// application forwards them to whatever analytics backend it uses.
//
// ## Events
//
// See [`events`] for the names emitted by the SDK itself.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Parameters attached to an analytics event
pub type EventParams = BTreeMap<String, Value>;

/// Event names emitted by the SDK
pub mod events {
    pub const SDK_INITIALIZED: &str = "bingo_sdk_initialized";
    pub const VALIDATION_SUCCESS: &str = "address_validation_success";
    pub const VALIDATION_FAILED: &str = "address_validation_failed";
    pub const SUBMISSION_STARTED: &str = "address_submission_started";
    pub const SUBMISSION_SUCCESS: &str = "address_submission_success";
    pub const SUBMISSION_FAILED: &str = "address_submission_failed";
}

/// Trait for analytics backends
///
/// Calls are made synchronously from whichever task is driving a submission,
/// so implementations should hand work off rather than block.
pub trait AnalyticsAdapter: Send + Sync {
    /// Record a named event
    fn track_event(&self, name: &str, params: &EventParams);

    /// Associate subsequent events with a user
    fn set_user_id(&self, id: &str);

    /// Set a user-scoped property
    fn set_user_property(&self, key: &str, value: &str);
}

type TrackFn = Box<dyn Fn(&str, &EventParams) + Send + Sync>;
type UserIdFn = Box<dyn Fn(&str) + Send + Sync>;
type UserPropertyFn = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Analytics adapter assembled from three closures
///
/// Convenient at language boundaries where the host can hand over function
/// pointers but not implement a trait.
pub struct FnAnalyticsAdapter {
    track: TrackFn,
    set_user_id: UserIdFn,
    set_user_property: UserPropertyFn,
}

impl FnAnalyticsAdapter {
    pub fn new(
        track: impl Fn(&str, &EventParams) + Send + Sync + 'static,
        set_user_id: impl Fn(&str) + Send + Sync + 'static,
        set_user_property: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            track: Box::new(track),
            set_user_id: Box::new(set_user_id),
            set_user_property: Box::new(set_user_property),
        }
    }
}

impl fmt::Debug for FnAnalyticsAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAnalyticsAdapter").finish_non_exhaustive()
    }
}

impl AnalyticsAdapter for FnAnalyticsAdapter {
    fn track_event(&self, name: &str, params: &EventParams) {
        (self.track)(name, params)
    }

    fn set_user_id(&self, id: &str) {
        (self.set_user_id)(id)
    }

    fn set_user_property(&self, key: &str, value: &str) {
        (self.set_user_property)(key, value)
    }
}

/// Analytics adapter that writes every event to `tracing` at INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalyticsAdapter;

impl AnalyticsAdapter for TracingAnalyticsAdapter {
    fn track_event(&self, name: &str, params: &EventParams) {
        let params = serde_json::to_string(params).unwrap_or_default();
        tracing::info!(event = name, %params, "analytics event");
    }

    fn set_user_id(&self, id: &str) {
        tracing::info!(user_id = id, "analytics user id set");
    }

    fn set_user_property(&self, key: &str, value: &str) {
        tracing::info!(key, value, "analytics user property set");
    }
}
