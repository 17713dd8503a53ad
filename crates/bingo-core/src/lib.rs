// # bingo-core
//
// Core library for the Bingo address SDK.
//
// ## Architecture Overview
//
// - **Address**: Field/value map submitted to the address service
// - **validate_address**: Blank-field check run before submission
// - **AddressTransport**: Trait for the HTTP client carrying a submission
// - **AddressApiService**: One POST per submission, mapped to a result stream
// - **AddressRepository**: Parameter adaptation and transport lifecycle
// - **AddressManager**: Validation + submission + hooks, stream and callback conventions
// - **BingoSdk**: Explicit handle exposing the public API
// - **AddressBook**: Session-local saved addresses
//
// ## Design Principles
//
// 1. **Failures are values**: Submissions end in `ApiResult::Error`, never a panic
// 2. **One request per submission**: No retries, no caching, no queuing
// 3. **Stream first**: The callback convention is a thin adapter over the stream
// 4. **No globals**: All state hangs off a `BingoSdk` handle

pub mod address;
pub mod api;
pub mod book;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod hooks;
pub mod manager;
pub mod model;
pub mod repository;
pub mod sdk;
pub mod traits;
pub mod validation;

/// SDK version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export core types for convenience
pub use address::{Address, AddressFields, RawJson};
pub use api::{AddressApiService, ResultStream};
pub use book::{AddressBook, AddressDraft, BookState, SavedAddress};
pub use config::SdkConfig;
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use hooks::SdkHooks;
pub use manager::AddressManager;
pub use model::{AddAddressResponse, ApiResult, SubmissionResult};
pub use repository::AddressRepository;
pub use sdk::BingoSdk;
pub use traits::{
    AddressTransport, AnalyticsAdapter, CrashReporter, EventParams, FnAnalyticsAdapter,
    TracingAnalyticsAdapter, TracingCrashReporter, TransportResponse,
};
pub use validation::validate_address;
