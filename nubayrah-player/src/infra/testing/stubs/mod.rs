pub mod browser;
pub mod catalogue;

pub use browser::RecordingOpener;
pub use catalogue::StubCatalogueService;
