//! Library domain types

/// Trigger for catalogue fetches.
///
/// A fetch is issued only on the transition into `Pending`; the signal
/// returns to `Idle` when that fetch settles, whatever its result. Requests
/// arriving while `Pending` are coalesced into the outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadSignal {
    Idle,
    /// The application starts here; the boot task issues the first fetch.
    #[default]
    Pending,
}

impl ReloadSignal {
    pub fn is_pending(&self) -> bool {
        matches!(self, ReloadSignal::Pending)
    }

    /// `Idle -> Pending`. Returns `false` when a fetch is already outstanding.
    pub fn arm(&mut self) -> bool {
        match self {
            ReloadSignal::Idle => {
                *self = ReloadSignal::Pending;
                true
            }
            ReloadSignal::Pending => false,
        }
    }

    pub fn settle(&mut self) {
        *self = ReloadSignal::Idle;
    }
}
