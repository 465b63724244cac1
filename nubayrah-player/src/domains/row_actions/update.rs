use std::sync::Arc;

use iced::Task;

use super::messages::RowActionMessage;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::notification::OperationKind;
use crate::infra::api_types::BookId;
use crate::infra::services::browser::OpenRequest;
use crate::state::State;

pub fn update_row_actions(
    state: &mut State,
    message: RowActionMessage,
) -> DomainUpdateResult {
    match message {
        RowActionMessage::ViewCover(id) => {
            handle_view_cover(state, &id);
            DomainUpdateResult::none()
        }
        RowActionMessage::RequestDelete(id) => handle_request_delete(state, id),
        RowActionMessage::Deleted(id, outcome) => {
            state.domains.row_actions.state.clear_deleting(&id);
            log::info!(
                "[RowAction] Delete of {} finished: {}",
                id,
                outcome.summary()
            );
            DomainUpdateResult::none().add_event(
                CrossDomainEvent::OperationCompleted {
                    operation: OperationKind::Delete,
                    outcome,
                },
            )
        }
    }
}

fn handle_view_cover(state: &mut State, id: &BookId) {
    let request = OpenRequest::isolated(state.catalogue.cover_url(id));
    log::debug!("[RowAction] Opening cover {}", request.url());

    let result = state.opener.open(&request);
    let row_actions = &mut state.domains.row_actions.state;
    match result {
        Ok(()) => row_actions.last_open_error = None,
        Err(err) => {
            log::warn!(
                "[RowAction] Could not open cover {}: {}",
                request.url(),
                err
            );
            row_actions.last_open_error = Some(err.to_string());
        }
    }
    row_actions.last_cover_request = Some(request);
}

fn handle_request_delete(state: &mut State, id: BookId) -> DomainUpdateResult {
    log::info!("[RowAction] Deleting {}", id);
    state.domains.row_actions.state.mark_deleting(id.clone());

    let catalogue = Arc::clone(&state.catalogue);
    let task = Task::perform(
        async move {
            let outcome = catalogue.delete_book(&id).await;
            (id, outcome)
        },
        |(id, outcome)| {
            DomainMessage::RowAction(RowActionMessage::Deleted(id, outcome))
        },
    );

    DomainUpdateResult::with_events(
        task,
        vec![CrossDomainEvent::OperationStarted(OperationKind::Delete)],
    )
}

#[cfg(test)]
mod tests {
    use std::io;

    use reqwest::StatusCode;

    use super::*;
    use crate::domains::notification::Severity;
    use crate::infra::api_types::{OperationOutcome, StatusLine};
    use crate::infra::services::browser::MockBrowsingContextOpener;
    use crate::infra::services::catalogue::MockCatalogueService;
    use crate::infra::testing::harness::drive;

    fn cover_catalogue() -> MockCatalogueService {
        let mut catalogue = MockCatalogueService::new();
        catalogue
            .expect_cover_url()
            .returning(|id| format!("http://localhost:5050/books/{id}/cover"));
        catalogue
    }

    #[test]
    fn view_cover_opens_isolated_context() {
        let mut opener = MockBrowsingContextOpener::new();
        opener
            .expect_open()
            .withf(|request| {
                request.url() == "http://localhost:5050/books/42/cover"
                    && request.no_opener()
                    && request.no_referrer()
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut state = State::with_services(
            "http://localhost:5050",
            Arc::new(cover_catalogue()),
            Arc::new(opener),
        );

        let _ = update_row_actions(
            &mut state,
            RowActionMessage::ViewCover(BookId::from(42)),
        );

        let row_actions = &state.domains.row_actions.state;
        assert!(row_actions.last_open_error.is_none());
        assert!(row_actions.last_cover_request.is_some());
    }

    #[test]
    fn opener_failure_is_only_recorded() {
        let mut opener = MockBrowsingContextOpener::new();
        opener
            .expect_open()
            .returning(|_| Err(io::Error::other("no display")));
        let mut state = State::with_services(
            "http://localhost:5050",
            Arc::new(cover_catalogue()),
            Arc::new(opener),
        );

        let result = update_row_actions(
            &mut state,
            RowActionMessage::ViewCover(BookId::from(7)),
        );

        assert!(result.events.is_empty());
        assert_eq!(
            state.domains.row_actions.state.last_open_error.as_deref(),
            Some("no display")
        );
        assert!(!state.domains.notification.state.visible());
    }

    #[tokio::test]
    async fn delete_reports_server_status_through_notification() {
        let mut catalogue = MockCatalogueService::new();
        catalogue
            .expect_delete_book()
            .withf(|id| id.as_str() == "9")
            .times(1)
            .returning(|_| {
                OperationOutcome::status_failure(
                    StatusLine::from_status(StatusCode::INTERNAL_SERVER_ERROR),
                    "locked",
                )
            });
        let mut state = State::with_services(
            "http://localhost:5050",
            Arc::new(catalogue),
            Arc::new(MockBrowsingContextOpener::new()),
        );

        let task = crate::update::update(
            &mut state,
            DomainMessage::RowAction(RowActionMessage::RequestDelete(
                BookId::from(9),
            )),
        );
        assert!(state.domains.row_actions.state.is_deleting(&BookId::from(9)));
        assert!(!state.domains.notification.state.visible());

        drive(&mut state, task).await;

        let notification = &state.domains.notification.state;
        assert!(notification.visible());
        assert_eq!(notification.severity(), Some(Severity::Failure));
        let outcome = notification.outcome().expect("outcome");
        assert_eq!(outcome.status_code(), Some(500));
        assert_eq!(outcome.message(), Some("locked"));
        assert_eq!(state.domains.row_actions.state.deletes_in_flight(), 0);
    }
}
