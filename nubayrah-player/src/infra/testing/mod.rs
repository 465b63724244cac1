//! In-memory doubles used by unit and integration tests.

pub mod harness;
pub mod stubs;

pub use harness::{collect_outputs, drive};
pub use stubs::{RecordingOpener, StubCatalogueService};
