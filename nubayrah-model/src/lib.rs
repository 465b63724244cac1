//! Core data model definitions shared across Nubayrah crates.
#![allow(missing_docs)]

#[cfg(feature = "chrono")]
pub use ::chrono;

pub mod book;
pub mod catalogue;
pub mod error;
pub mod ids;
pub mod prelude;

pub use book::BookRecord;
pub use catalogue::CatalogueSnapshot;
pub use error::{ModelError, Result as ModelResult};
pub use ids::BookId;
