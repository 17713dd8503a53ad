//! SDK facade
//!
//! [`BingoSdk`] is the stable public surface. The host constructs one handle
//! at startup and passes it by reference wherever addresses are submitted;
//! there is no process-wide singleton, so independent handles (for example in
//! tests) never share state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bingo_core::{BingoSdk, SdkConfig, TracingAnalyticsAdapter};
//! use std::sync::Arc;
//!
//! let sdk = BingoSdk::new(SdkConfig::default(), transport)?;
//! sdk.initialize(Arc::new(TracingAnalyticsAdapter))?;
//!
//! let address = BingoSdk::create_address("1 Main", "NY", "NY", "10001", "USA");
//! if sdk.validate_address(&address).is_empty() {
//!     let mut results = sdk.add_home_address(&address);
//!     while let Some(state) = results.next().await {
//!         println!("{:?}", state);
//!     }
//! }
//! sdk.cleanup();
//! ```

use crate::address::{Address, RawJson};
use crate::api::ResultStream;
use crate::config::SdkConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::hooks::SdkHooks;
use crate::manager::AddressManager;
use crate::model::AddAddressResponse;
use crate::repository::AddressRepository;
use crate::traits::{AddressTransport, AnalyticsAdapter, CrashReporter, events};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Handle to the Bingo SDK
#[derive(Debug)]
pub struct BingoSdk {
    config: SdkConfig,
    hooks: Arc<SdkHooks>,
    manager: AddressManager,
}

impl BingoSdk {
    /// SDK version string
    pub const VERSION: &'static str = crate::VERSION;

    /// Create an SDK handle around a transport
    ///
    /// Callback-convention submissions run on the caller's tokio runtime if
    /// there is one at call time, otherwise on a runtime owned by this handle.
    /// The runtime the SDK was built in may shut down without affecting later
    /// callback submissions.
    ///
    /// # Returns
    ///
    /// - `Ok(BingoSdk)`: Ready to use
    /// - `Err(Error)`: Invalid configuration or the dispatcher runtime could not start
    pub fn new(config: SdkConfig, transport: Arc<dyn AddressTransport>) -> Result<Self> {
        Self::with_dispatcher(config, transport, Dispatcher::new()?)
    }

    /// Create an SDK handle with an explicit dispatcher
    pub fn with_dispatcher(
        config: SdkConfig,
        transport: Arc<dyn AddressTransport>,
        dispatcher: Dispatcher,
    ) -> Result<Self> {
        let repository = AddressRepository::new(transport, &config)?;
        let hooks = Arc::new(SdkHooks::new());
        let manager = AddressManager::new(repository, Arc::clone(&hooks), Arc::new(dispatcher));

        info!("Bingo SDK {} ready (endpoint: {})", Self::VERSION, config.endpoint_url());

        Ok(Self {
            config,
            hooks,
            manager,
        })
    }

    /// Register the analytics adapter (once per handle)
    ///
    /// Emits `bingo_sdk_initialized` with the SDK version.
    ///
    /// # Returns
    ///
    /// - `Err(Error::AlreadyInitialized)`: If an adapter was already registered
    pub fn initialize(&self, adapter: Arc<dyn AnalyticsAdapter>) -> Result<()> {
        self.hooks.set_analytics(adapter)?;
        self.hooks.track(
            events::SDK_INITIALIZED,
            [("version".to_string(), Value::from(Self::VERSION))]
                .into_iter()
                .collect(),
        );
        info!("Analytics adapter registered");
        Ok(())
    }

    /// Register the crash reporter (once per handle)
    pub fn set_crash_reporter(&self, reporter: Arc<dyn CrashReporter>) -> Result<()> {
        self.hooks.set_crash_reporter(reporter)?;
        info!("Crash reporter registered");
        Ok(())
    }

    /// The registered analytics adapter, for `set_user_id` and friends
    pub fn analytics(&self) -> Option<Arc<dyn AnalyticsAdapter>> {
        self.hooks.analytics()
    }

    /// Validate address data before submission
    ///
    /// # Returns
    ///
    /// Validation error messages, empty if valid
    pub fn validate_address(&self, address: &Address) -> Vec<String> {
        self.manager.validate_address(address)
    }

    /// Add a home address, returning the result stream
    pub fn add_home_address(&self, address: &Address) -> ResultStream {
        self.manager.add_home_address(address)
    }

    /// Add a home address, reporting through callbacks
    ///
    /// See [`AddressManager::add_home_address_with_callbacks`] for ordering.
    pub fn add_home_address_with_callbacks<L, S, E>(
        &self,
        address: &Address,
        on_loading: L,
        on_success: S,
        on_error: E,
    ) -> JoinHandle<()>
    where
        L: FnMut() + Send + 'static,
        S: FnOnce(AddAddressResponse) + Send + 'static,
        E: FnOnce(String) + Send + 'static,
    {
        self.manager
            .add_home_address_with_callbacks(address, on_loading, on_success, on_error)
    }

    /// Submit a caller-serialized JSON body verbatim
    pub fn add_address_raw(&self, json: RawJson) -> ResultStream {
        self.manager.add_address_raw(json)
    }

    /// Build a home address map (`type = "home"` plus the five fields)
    pub fn create_address(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Address {
        Address::home(street, city, state, zip_code, country)
    }

    /// Release network resources
    ///
    /// Later submissions resolve to a transport-closed error.
    pub fn cleanup(&self) {
        self.manager.cleanup();
    }

    /// The active configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// The underlying manager
    pub fn manager(&self) -> &AddressManager {
        &self.manager
    }
}
