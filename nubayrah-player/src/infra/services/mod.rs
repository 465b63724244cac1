pub mod browser;
pub mod catalogue;

pub use browser::{
    BrowsingContextOpener, OpenRequest, OpenTarget, SystemBrowser,
};
pub use catalogue::CatalogueService;
