//! Client-side address validation
//!
//! The only rule is "present fields must not be blank". Fields missing from the
//! map are never reported; there is no notion of a required field list.

use crate::address::Address;

/// Check an address for blank values
///
/// Returns one `"{field} is mandatory"` message per field whose trimmed value
/// is empty, in key order. An empty vector means the address is valid.
pub fn validate_address(address: &Address) -> Vec<String> {
    address
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| format!("{} is mandatory", key))
        .collect()
}
