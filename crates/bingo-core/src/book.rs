// # Address Book
//
// In-memory list of addresses the user has saved during this session, plus
// the loading/error/success state a screen renders from. Nothing here is
// persisted or synced with server-assigned identifiers: ids are a local
// counter.
//
// ## Default Address
//
// - The first address saved becomes the default
// - Saving with `is_default` (or calling `set_default`) clears every other default
// - Deleting the default does not promote another address

use crate::address::{Address, fields};
use crate::manager::AddressManager;
use crate::model::ApiResult;
use tokio_stream::StreamExt;
use tracing::debug;

/// `type` sent for addresses submitted through the book
pub const DELIVERY_ADDRESS_TYPE: &str = "delivery";

/// Country sent for addresses submitted through the book
pub const DEFAULT_COUNTRY: &str = "USA";

/// Shown after a successful submission
pub const ADDED_MESSAGE: &str = "Address added successfully!";

/// Shown after a deletion
pub const DELETED_MESSAGE: &str = "Address deleted";

/// An address saved in the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAddress {
    pub id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_default: bool,
}

/// Input for [`AddressBook::submit`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_default: bool,
}

impl AddressDraft {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            is_default: false,
        }
    }

    /// Mark the draft as the new default address
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// The address map submitted for this draft
    pub fn to_address(&self) -> Address {
        Address::new()
            .with_field(fields::TYPE, DELIVERY_ADDRESS_TYPE)
            .with_field(fields::STREET, self.street.as_str())
            .with_field(fields::CITY, self.city.as_str())
            .with_field(fields::STATE, self.state.as_str())
            .with_field(fields::ZIP_CODE, self.zip_code.as_str())
            .with_field(fields::COUNTRY, DEFAULT_COUNTRY)
    }
}

/// Render state of the book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

/// Session-local saved addresses
#[derive(Debug, Default)]
pub struct AddressBook {
    addresses: Vec<SavedAddress>,
    state: BookState,
    next_id: u64,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved addresses, in insertion order
    pub fn addresses(&self) -> &[SavedAddress] {
        &self.addresses
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    /// The current default address, if any
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Submit a draft and save it locally once the service accepts it
    ///
    /// # Returns
    ///
    /// The saved address on success, `None` if the submission failed (the
    /// failure message is left in [`BookState::error`]).
    pub async fn submit(
        &mut self,
        manager: &AddressManager,
        draft: AddressDraft,
    ) -> Option<SavedAddress> {
        let mut results = manager.add_home_address(&draft.to_address());

        while let Some(result) = results.next().await {
            match result {
                ApiResult::Loading => {
                    self.state.is_loading = true;
                    self.state.error = None;
                }
                ApiResult::Success(response) => {
                    debug!("Address accepted by service (id: {:?})", response.id);
                    self.state.is_loading = false;
                    self.state.success_message = Some(ADDED_MESSAGE.to_string());
                    return Some(self.save(draft));
                }
                ApiResult::Error { message, .. } => {
                    self.state.is_loading = false;
                    self.state.error = Some(message);
                    return None;
                }
            }
        }

        self.state.is_loading = false;
        None
    }

    /// Save a draft without submitting it
    pub fn save(&mut self, draft: AddressDraft) -> SavedAddress {
        self.next_id += 1;

        let is_default = draft.is_default || self.addresses.is_empty();
        if draft.is_default {
            self.clear_defaults();
        }

        let saved = SavedAddress {
            id: self.next_id.to_string(),
            street: draft.street,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            is_default,
        };
        self.addresses.push(saved.clone());
        saved
    }

    /// Remove an address by id; unknown ids are ignored
    pub fn delete(&mut self, id: &str) {
        self.addresses.retain(|a| a.id != id);
        self.state.success_message = Some(DELETED_MESSAGE.to_string());
    }

    /// Make `id` the only default address
    pub fn set_default(&mut self, id: &str) {
        for address in &mut self.addresses {
            address.is_default = address.id == id;
        }
    }

    /// Dismiss the error and success banners
    pub fn clear_messages(&mut self) {
        self.state.error = None;
        self.state.success_message = None;
    }

    fn clear_defaults(&mut self) {
        for address in &mut self.addresses {
            address.is_default = false;
        }
    }
}
