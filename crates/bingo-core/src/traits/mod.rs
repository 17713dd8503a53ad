//! Core traits for the Bingo SDK
//!
//! These are the seams where the host application (or a plugin crate) plugs in:
//!
//! - [`AddressTransport`]: Send the HTTP request for a submission
//! - [`AnalyticsAdapter`]: Receive named usage events
//! - [`CrashReporter`]: Receive failure breadcrumbs

pub mod transport;
pub mod analytics;
pub mod crash_reporter;

pub use transport::{AddressTransport, TransportResponse};
pub use analytics::{events, AnalyticsAdapter, EventParams, FnAnalyticsAdapter, TracingAnalyticsAdapter};
pub use crash_reporter::{CrashReporter, TracingCrashReporter};
