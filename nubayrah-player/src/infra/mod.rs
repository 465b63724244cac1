//! Infrastructure shared by the domains: the catalogue transport, service
//! seams and test doubles.

pub mod api_client;
pub mod api_types;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api_client::ApiClient;
pub use api_types::*;
