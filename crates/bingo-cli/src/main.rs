// # bingo-cli - Address Submitter
//
// Thin integration layer over bingo-core. Reads configuration from the
// environment, validates one address, submits it, and maps the outcome to an
// exit code. All validation and submission logic lives in the library.
//
// ## Configuration
//
// ### Service
// - `BINGO_BASE_URL`: Base URL of the address service
// - `BINGO_ENDPOINT_PATH`: Path of the add-address endpoint
// - `BINGO_TIMEOUT_SECS`: Request timeout in seconds
// - `BINGO_LOG_LEVEL`: trace, debug, info, warn, error
//
// ### Address
// - `BINGO_STREET`, `BINGO_CITY`, `BINGO_STATE`, `BINGO_ZIP_CODE`, `BINGO_COUNTRY`
//
// ### Raw submission
// - `BINGO_RAW_JSON`: Request body sent verbatim (address fields are ignored)
//
// ## Example
//
// ```bash
// export BINGO_STREET="1 Main"
// export BINGO_CITY=NY
// export BINGO_STATE=NY
// export BINGO_ZIP_CODE=10001
// export BINGO_COUNTRY=USA
//
// bingo-cli
// ```

use anyhow::Result;
use bingo_core::{
    Address, ApiResult, BingoSdk, RawJson, SdkConfig, TracingAnalyticsAdapter,
    TracingCrashReporter,
};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the possible outcomes
///
/// - 0: Address submitted
/// - 1: Configuration or validation error
/// - 2: Submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliExitCode {
    /// The service accepted the address
    Submitted = 0,
    /// Configuration error, invalid address, or startup failure
    ConfigError = 1,
    /// The service rejected the address or could not be reached
    SubmissionFailed = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    base_url: Option<String>,
    endpoint_path: Option<String>,
    timeout_secs: Option<u64>,
    log_level: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    raw_json: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let timeout_secs = match env::var("BINGO_TIMEOUT_SECS") {
            Ok(value) => Some(value.trim().parse().map_err(|_| {
                anyhow::anyhow!("BINGO_TIMEOUT_SECS must be a number. Got: {}", value)
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var("BINGO_BASE_URL").ok(),
            endpoint_path: env::var("BINGO_ENDPOINT_PATH").ok(),
            timeout_secs,
            log_level: env::var("BINGO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            street: env::var("BINGO_STREET").unwrap_or_default(),
            city: env::var("BINGO_CITY").unwrap_or_default(),
            state: env::var("BINGO_STATE").unwrap_or_default(),
            zip_code: env::var("BINGO_ZIP_CODE").unwrap_or_default(),
            country: env::var("BINGO_COUNTRY").unwrap_or_default(),
            raw_json: env::var("BINGO_RAW_JSON").ok().filter(|s| !s.trim().is_empty()),
        })
    }

    /// Validate the CLI-level settings
    ///
    /// Service settings are checked by `SdkConfig::validate` when the SDK is
    /// built; address fields are checked by the SDK's validator.
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_secs
            && !(1..=300).contains(&timeout)
        {
            anyhow::bail!(
                "BINGO_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                timeout
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "BINGO_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    /// SDK configuration, starting from the library defaults
    fn sdk_config(&self) -> SdkConfig {
        let mut config = SdkConfig::default();
        if let Some(ref base_url) = self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(ref endpoint_path) = self.endpoint_path {
            config = config.with_endpoint_path(endpoint_path.as_str());
        }
        if let Some(timeout) = self.timeout_secs {
            config = config.with_timeout_secs(timeout);
        }
        config
    }

    fn address(&self) -> Address {
        BingoSdk::create_address(
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip_code.as_str(),
            self.country.as_str(),
        )
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CliExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return CliExitCode::ConfigError.into();
    }

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CliExitCode::ConfigError.into();
    }

    info!("Starting bingo-cli {}", BingoSdk::VERSION);

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CliExitCode::ConfigError.into();
        }
    };

    let code = rt.block_on(async {
        match run(config).await {
            Ok(code) => code,
            Err(e) => {
                error!("Startup error: {}", e);
                CliExitCode::ConfigError
            }
        }
    });

    code.into()
}

/// Validate and submit one address
async fn run(config: Config) -> Result<CliExitCode> {
    let sdk = bingo_transport_http::http_sdk(config.sdk_config())?;
    sdk.initialize(Arc::new(TracingAnalyticsAdapter))?;
    sdk.set_crash_reporter(Arc::new(TracingCrashReporter))?;

    info!("Submitting to {}", sdk.config().endpoint_url());

    let mut results = match config.raw_json {
        Some(ref raw) => {
            info!("Submitting raw JSON body ({} bytes)", raw.len());
            sdk.add_address_raw(RawJson::new(raw.as_str()))
        }
        None => {
            let address = config.address();
            let errors = sdk.validate_address(&address);
            if !errors.is_empty() {
                for message in &errors {
                    error!("Invalid address: {}", message);
                }
                sdk.cleanup();
                return Ok(CliExitCode::ConfigError);
            }
            sdk.add_home_address(&address)
        }
    };

    let mut code = CliExitCode::SubmissionFailed;
    while let Some(state) = results.next().await {
        match state {
            ApiResult::Loading => info!("Submitting address..."),
            ApiResult::Success(response) => {
                info!(
                    "Address added (id: {:?}, status: {:?})",
                    response.id, response.status
                );
                code = CliExitCode::Submitted;
            }
            ApiResult::Error { message, code: status } => match status {
                Some(status) => warn!("Submission rejected ({}): {}", status, message),
                None => warn!("Submission failed: {}", message),
            },
        }
    }

    sdk.cleanup();
    Ok(code)
}
