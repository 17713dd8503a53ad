// # Address Records
//
// An address is a flat map of field name to field value. The SDK imposes no
// schema: keys are whatever the caller supplies, and the conventional names
// below are only what the bundled builders and the address book use.
//
// Two request body shapes exist:
//
// - [`Address`]: a structured map, wrapped as `{"data": {...}}` on the wire
// - [`RawJson`]: an opaque caller-serialized body, sent verbatim

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Conventional address field names
pub mod fields {
    pub const TYPE: &str = "type";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zipCode";
    pub const COUNTRY: &str = "country";
    pub const COMPANY_NAME: &str = "companyName";
}

/// Value of the `type` field injected by [`Address::home`]
pub const HOME_ADDRESS_TYPE: &str = "home";

/// A postal address (or arbitrary delivery metadata) as field/value pairs
///
/// Backed by a `BTreeMap`, so iteration order is ascending by key regardless
/// of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(BTreeMap<String, String>);

impl Address {
    /// Create an empty address
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a home address with the conventional fields
    ///
    /// The result always carries `type = "home"` in addition to the five
    /// supplied fields.
    pub fn home(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self::new()
            .with_field(fields::TYPE, HOME_ADDRESS_TYPE)
            .with_field(fields::STREET, street)
            .with_field(fields::CITY, city)
            .with_field(fields::STATE, state)
            .with_field(fields::ZIP_CODE, zip_code)
            .with_field(fields::COUNTRY, country)
    }

    /// Set a field, builder style
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `type` field, if present
    pub fn address_type(&self) -> Option<&str> {
        self.get(fields::TYPE)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the address has no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Address
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for Address {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for Address {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// Optional convenience fields for [`crate::AddressRepository::add_address_fields`]
///
/// Only the fields that are `Some` end up in the submitted address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl AddressFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Convert into an address containing only the supplied fields
    pub fn into_address(self) -> Address {
        [
            (fields::STREET, self.street),
            (fields::CITY, self.city),
            (fields::STATE, self.state),
            (fields::ZIP_CODE, self.zip_code),
            (fields::COUNTRY, self.country),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

impl From<AddressFields> for Address {
    fn from(fields: AddressFields) -> Self {
        fields.into_address()
    }
}

/// A pre-serialized JSON request body
///
/// The SDK never parses or validates it; it is posted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJson(String);

impl RawJson {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RawJson {
    fn from(body: String) -> Self {
        Self(body)
    }
}

impl From<&str> for RawJson {
    fn from(body: &str) -> Self {
        Self(body.to_string())
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
