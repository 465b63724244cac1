//! Convenience re-exports for downstream crates.

pub use crate::book::BookRecord;
pub use crate::catalogue::CatalogueSnapshot;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::BookId;
