//! Address manager
//!
//! The manager composes validation and submission, reports each lifecycle
//! point to the registered hooks, and offers the two calling conventions:
//!
//! - **Stream**: [`AddressManager::add_home_address`] returns the result stream
//! - **Callbacks**: [`AddressManager::add_home_address_with_callbacks`] drives
//!   that same stream on the dispatcher and re-dispatches each state
//!
//! Both conventions share one stream, so hooks fire identically and callbacks
//! observe states in stream order.

use crate::address::{Address, RawJson};
use crate::api::ResultStream;
use crate::dispatcher::Dispatcher;
use crate::hooks::{SdkHooks, address_type_label};
use crate::model::{AddAddressResponse, ApiResult};
use crate::repository::AddressRepository;
use crate::validation;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;
use tracing::debug;

/// Domain-level entry point for address operations
#[derive(Debug)]
pub struct AddressManager {
    repository: AddressRepository,
    hooks: Arc<SdkHooks>,
    dispatcher: Arc<Dispatcher>,
}

impl AddressManager {
    /// Create a new manager
    ///
    /// # Parameters
    ///
    /// - `repository`: Repository that owns the transport
    /// - `hooks`: Analytics/crash hooks shared with the SDK facade
    /// - `dispatcher`: Where callback-convention submissions run
    pub fn new(
        repository: AddressRepository,
        hooks: Arc<SdkHooks>,
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        Self {
            repository,
            hooks,
            dispatcher,
        }
    }

    /// Validate an address and report the outcome to analytics
    ///
    /// # Returns
    ///
    /// One `"{field} is mandatory"` message per blank field; empty when valid.
    pub fn validate_address(&self, address: &Address) -> Vec<String> {
        let errors = validation::validate_address(address);
        debug!(
            "Validated address with {} field(s): {} error(s)",
            address.len(),
            errors.len()
        );
        self.hooks.record_validation(address.len(), &errors);
        errors
    }

    /// Submit an address (stream convention)
    ///
    /// The address is submitted as given; call [`Self::validate_address`]
    /// first if blank fields should block submission.
    pub fn add_home_address(&self, address: &Address) -> ResultStream {
        let stream = self.repository.add_address(address);
        self.observe(address_type_label(address.address_type()), stream)
    }

    /// Submit a pre-serialized JSON body (stream convention)
    pub fn add_address_raw(&self, json: RawJson) -> ResultStream {
        let stream = self.repository.add_address_raw(json);
        self.observe(address_type_label(None), stream)
    }

    /// Submit an address (callback convention)
    ///
    /// Spawns one task on the dispatcher. `on_loading` runs for each `Loading`
    /// state (exactly once in practice), then exactly one of `on_success` or
    /// `on_error` runs. There is no cancellation: dropping the returned handle
    /// detaches the task, which still runs to its terminal callback.
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
        let stream = self.add_home_address(address);
        self.dispatcher
            .spawn(dispatch_callbacks(stream, on_loading, on_success, on_error))
    }

    /// Release network resources
    pub fn cleanup(&self) {
        self.repository.cleanup();
    }

    /// The underlying repository
    pub fn repository(&self) -> &AddressRepository {
        &self.repository
    }

    fn observe(&self, address_type: String, stream: ResultStream) -> ResultStream {
        let hooks = Arc::clone(&self.hooks);
        Box::pin(stream.map(move |result| {
            hooks.record_submission(&address_type, &result);
            result
        }))
    }
}

/// Consume a result stream, invoking the matching callback for each state
///
/// Returns after the first terminal state.
pub async fn dispatch_callbacks<L, S, E>(
    mut stream: ResultStream,
    mut on_loading: L,
    on_success: S,
    on_error: E,
) where
    L: FnMut(),
    S: FnOnce(AddAddressResponse),
    E: FnOnce(String),
{
    while let Some(result) = stream.next().await {
        match result {
            ApiResult::Loading => on_loading(),
            ApiResult::Success(response) => {
                on_success(response);
                return;
            }
            ApiResult::Error { message, .. } => {
                on_error(message);
                return;
            }
        }
    }
}
