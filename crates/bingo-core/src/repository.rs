//! Address repository
//!
//! Thin facade between the manager and the API service. It adapts the
//! convenience parameter shapes into an [`Address`] and owns the transport's
//! lifecycle: [`AddressRepository::cleanup`] closes it exactly once.

use crate::address::{Address, AddressFields, RawJson};
use crate::api::{AddressApiService, ResultStream};
use crate::config::SdkConfig;
use crate::error::Result;
use crate::traits::AddressTransport;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Repository for address submissions
pub struct AddressRepository {
    /// Transport shared by every submission (closed on cleanup)
    transport: Arc<dyn AddressTransport>,

    /// API service bound to the configured endpoint
    api: AddressApiService,

    /// Set once `cleanup()` has run
    cleaned_up: AtomicBool,
}

impl fmt::Debug for AddressRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressRepository")
            .field("api", &self.api)
            .field("cleaned_up", &self.is_cleaned_up())
            .finish()
    }
}

impl AddressRepository {
    /// Create a repository around a transport
    ///
    /// # Returns
    ///
    /// - `Ok(AddressRepository)`: Ready to submit
    /// - `Err(Error)`: If the configuration is invalid
    pub fn new(transport: Arc<dyn AddressTransport>, config: &SdkConfig) -> Result<Self> {
        config.validate()?;

        let api = AddressApiService::new(Arc::clone(&transport), config.endpoint_url());
        debug!("Address repository bound to {}", api.endpoint_url());

        Ok(Self {
            transport,
            api,
            cleaned_up: AtomicBool::new(false),
        })
    }

    /// Submit a structured address
    pub fn add_address(&self, address: &Address) -> ResultStream {
        self.api.add_address(address)
    }

    /// Submit a pre-serialized JSON body
    pub fn add_address_raw(&self, json: RawJson) -> ResultStream {
        self.api.add_address_raw(json)
    }

    /// Submit the common fields; `None` fields are left out of the request
    pub fn add_address_fields(&self, fields: AddressFields) -> ResultStream {
        self.add_address(&fields.into_address())
    }

    /// Release the transport's resources
    ///
    /// Safe to call more than once; only the first call closes the transport.
    /// Submissions made afterwards resolve to a transport-closed error.
    pub fn cleanup(&self) {
        if self.cleaned_up.swap(true, Ordering::SeqCst) {
            debug!("Address repository already cleaned up");
            return;
        }

        info!("Closing {} transport", self.transport.transport_name());
        self.transport.close();
    }

    /// Whether `cleanup()` has been called
    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up.load(Ordering::SeqCst)
    }

    /// The underlying API service
    pub fn api(&self) -> &AddressApiService {
        &self.api
    }
}
