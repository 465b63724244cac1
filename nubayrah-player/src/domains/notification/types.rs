use reqwest::StatusCode;

use crate::infra::api_types::OperationOutcome;

/// Remote operations whose outcome is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Upload,
    Delete,
}

impl OperationKind {
    /// The only status that counts as success for this operation.
    pub fn expected_status(&self) -> StatusCode {
        match self {
            OperationKind::Upload => StatusCode::CREATED,
            OperationKind::Delete => StatusCode::NO_CONTENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Upload => "Upload",
            OperationKind::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Failure,
}

impl Severity {
    /// Info only when the server answered with the operation's expected
    /// status. Any other status, or none at all, is a failure.
    pub fn classify(
        operation: OperationKind,
        outcome: &OperationOutcome,
    ) -> Self {
        match outcome {
            OperationOutcome::Success { status }
                if status.is(operation.expected_status()) =>
            {
                Severity::Info
            }
            _ => Severity::Failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationPhase {
    #[default]
    Hidden,
    /// Operation issued, outcome not yet known. Not visible.
    Awaiting { operation: OperationKind },
    Shown {
        operation: OperationKind,
        outcome: OperationOutcome,
    },
}

/// Visibility and content of the outcome banner.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    phase: NotificationPhase,
}

impl NotificationState {
    pub fn phase(&self) -> &NotificationPhase {
        &self.phase
    }

    /// Note that `operation` was issued. A shown banner stays up until it
    /// is dismissed or the new outcome replaces it.
    pub fn begin(&mut self, operation: OperationKind) {
        if self.visible() {
            log::debug!(
                "[Notification] {} issued, keeping current banner",
                operation.label()
            );
            return;
        }
        log::debug!("[Notification] Awaiting {} outcome", operation.label());
        self.phase = NotificationPhase::Awaiting { operation };
    }

    pub fn show(
        &mut self,
        operation: OperationKind,
        outcome: OperationOutcome,
    ) {
        log::info!(
            "[Notification] {} finished: {}",
            operation.label(),
            outcome.summary()
        );
        self.phase = NotificationPhase::Shown { operation, outcome };
    }

    /// Hide a shown banner. Returns `false`, leaving the phase untouched,
    /// when nothing is shown.
    pub fn dismiss(&mut self) -> bool {
        match self.phase {
            NotificationPhase::Shown { .. } => {
                self.phase = NotificationPhase::Hidden;
                true
            }
            _ => false,
        }
    }

    pub fn visible(&self) -> bool {
        matches!(self.phase, NotificationPhase::Shown { .. })
    }

    pub fn operation(&self) -> Option<OperationKind> {
        match &self.phase {
            NotificationPhase::Hidden => None,
            NotificationPhase::Awaiting { operation }
            | NotificationPhase::Shown { operation, .. } => Some(*operation),
        }
    }

    pub fn outcome(&self) -> Option<&OperationOutcome> {
        match &self.phase {
            NotificationPhase::Shown { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match &self.phase {
            NotificationPhase::Shown { operation, outcome } => {
                Some(Severity::classify(*operation, outcome))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::api_types::{CatalogueError, StatusLine};

    #[test]
    fn delete_is_info_only_on_no_content() {
        let ok = OperationOutcome::success(StatusCode::NO_CONTENT);
        let odd = OperationOutcome::success(StatusCode::OK);
        assert_eq!(
            Severity::classify(OperationKind::Delete, &ok),
            Severity::Info
        );
        assert_eq!(
            Severity::classify(OperationKind::Delete, &odd),
            Severity::Failure
        );
    }

    #[test]
    fn upload_expects_created() {
        let created = OperationOutcome::success(StatusCode::CREATED);
        assert_eq!(
            Severity::classify(OperationKind::Upload, &created),
            Severity::Info
        );
        assert_eq!(
            Severity::classify(OperationKind::Delete, &created),
            Severity::Failure
        );
    }

    #[test]
    fn failures_are_never_info() {
        let transport: OperationOutcome =
            CatalogueError::Transport("connection refused".into()).into();
        let status = OperationOutcome::status_failure(
            StatusLine::new(500, "Internal Server Error"),
            "locked",
        );
        for outcome in [transport, status] {
            assert_eq!(
                Severity::classify(OperationKind::Delete, &outcome),
                Severity::Failure
            );
        }
    }

    #[test]
    fn awaiting_is_not_visible() {
        let mut state = NotificationState::default();
        state.begin(OperationKind::Delete);
        assert!(!state.visible());
        assert!(state.outcome().is_none());
        assert_eq!(state.operation(), Some(OperationKind::Delete));
        assert!(!state.dismiss());
        assert!(matches!(state.phase(), NotificationPhase::Awaiting { .. }));
    }

    #[test]
    fn visible_implies_outcome() {
        let mut state = NotificationState::default();
        state.show(
            OperationKind::Delete,
            OperationOutcome::success(StatusCode::NO_CONTENT),
        );
        assert!(state.visible());
        assert!(state.outcome().is_some());
        assert_eq!(state.severity(), Some(Severity::Info));

        assert!(state.dismiss());
        assert!(!state.visible());
        assert!(!state.dismiss());
    }

    #[test]
    fn begin_keeps_a_shown_banner_until_replaced() {
        let mut state = NotificationState::default();
        state.show(
            OperationKind::Delete,
            OperationOutcome::status_failure(
                StatusLine::new(500, "Internal Server Error"),
                "locked",
            ),
        );

        state.begin(OperationKind::Delete);
        assert!(state.visible());
        assert_eq!(state.outcome().and_then(|o| o.status_code()), Some(500));

        state.show(
            OperationKind::Delete,
            OperationOutcome::success(StatusCode::NO_CONTENT),
        );
        assert_eq!(state.severity(), Some(Severity::Info));
    }
}
