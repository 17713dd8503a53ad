// # Crash Reporter Trait
//
// Optional hook for platform crash reporters (Crashlytics and friends). The
// platform bindings themselves live in the host application; the SDK only
// leaves breadcrumbs when a submission fails.

use std::error::Error as StdError;

/// Trait for crash-reporting backends
pub trait CrashReporter: Send + Sync {
    /// Record a non-fatal error
    fn log_exception(&self, error: &(dyn StdError + 'static));

    /// Append a breadcrumb message
    fn log(&self, message: &str);

    /// Attach a key/value pair to future reports
    fn set_custom_key(&self, key: &str, value: &str);
}

/// Crash reporter that writes to `tracing`
///
/// Useful during development and in the CLI, where no platform reporter exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCrashReporter;

impl CrashReporter for TracingCrashReporter {
    fn log_exception(&self, error: &(dyn StdError + 'static)) {
        tracing::error!(error = %error, "non-fatal exception recorded");
    }

    fn log(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn set_custom_key(&self, key: &str, value: &str) {
        tracing::debug!(key, value, "crash reporter key set");
    }
}
