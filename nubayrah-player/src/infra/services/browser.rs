//! Opening addresses in a separate browsing context.

use std::fmt::Debug;
use std::io;

/// Where an [`OpenRequest`] should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// A fresh context with no relationship to this application.
    NewContext,
}

/// A request to show an address outside the application.
///
/// The isolation flags are fixed: a request built here never lets the new
/// context reach back into this one, and never forwards a referrer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    url: String,
    target: OpenTarget,
    no_opener: bool,
    no_referrer: bool,
}

impl OpenRequest {
    pub fn isolated(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: OpenTarget::NewContext,
            no_opener: true,
            no_referrer: true,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn target(&self) -> OpenTarget {
        self.target
    }

    pub fn no_opener(&self) -> bool {
        self.no_opener
    }

    pub fn no_referrer(&self) -> bool {
        self.no_referrer
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait BrowsingContextOpener: Send + Sync + Debug {
    fn open(&self, request: &OpenRequest) -> io::Result<()>;
}

/// Hands addresses to the desktop's default browser.
///
/// The browser runs as a separate detached process, so the opened page has no
/// handle on this application whatever flags it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowsingContextOpener for SystemBrowser {
    fn open(&self, request: &OpenRequest) -> io::Result<()> {
        log::info!("[Browser] Opening {} in system browser", request.url());
        open::that_detached(request.url())
    }
}
