use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use super::messages::UploadMessage;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::notification::OperationKind;
use crate::infra::api_types::{OperationOutcome, UploadFile};
use crate::state::State;

pub fn update_upload(
    state: &mut State,
    message: UploadMessage,
) -> DomainUpdateResult {
    let task = match message {
        UploadMessage::PathInputChanged(value) => {
            state.domains.upload.state.path_input = value;
            Task::none()
        }
        UploadMessage::LoadPathInput => {
            let raw = state.domains.upload.state.path_input.trim().to_string();
            if raw.is_empty() {
                state.domains.upload.state.last_outcome =
                    Some(OperationOutcome::no_file_selected());
                Task::none()
            } else {
                handle_select_path(state, PathBuf::from(raw))
            }
        }
        UploadMessage::SelectPath(path) => handle_select_path(state, path),
        UploadMessage::FileLoaded(result) => {
            let upload = &mut state.domains.upload.state;
            upload.reading_file = false;
            match result {
                Ok(file) => {
                    log::info!(
                        "[Upload] Selected {} ({} bytes)",
                        file.file_name,
                        file.len()
                    );
                    upload.selected = Some(file);
                }
                Err(err) => {
                    log::warn!("[Upload] Could not load file: {}", err);
                    upload.last_outcome = Some(err.into());
                }
            }
            Task::none()
        }
        UploadMessage::SelectFile(file) => {
            log::info!("[Upload] Selected {}", file.file_name);
            state.domains.upload.state.selected = Some(file);
            Task::none()
        }
        UploadMessage::Submit => return handle_submit(state),
        UploadMessage::Submitted(outcome) => {
            log::info!("[Upload] Finished: {}", outcome.summary());
            let upload = &mut state.domains.upload.state;
            upload.in_flight = false;
            upload.last_outcome = Some(outcome.clone());
            return DomainUpdateResult::none().add_event(
                CrossDomainEvent::OperationCompleted {
                    operation: OperationKind::Upload,
                    outcome,
                },
            );
        }
    };

    DomainUpdateResult::task(task.map(DomainMessage::Upload))
}

fn handle_select_path(
    state: &mut State,
    path: PathBuf,
) -> Task<UploadMessage> {
    log::debug!("[Upload] Reading {}", path.display());
    state.domains.upload.state.reading_file = true;
    Task::perform(
        async move { UploadFile::read(&path).await },
        UploadMessage::FileLoaded,
    )
}

/// Exactly one upload per accepted submit, never retried. Local
/// precondition failures stay inline and never reach the banner.
fn handle_submit(state: &mut State) -> DomainUpdateResult {
    let upload = &mut state.domains.upload.state;
    if upload.in_flight {
        log::debug!("[Upload] Submit ignored, upload already in flight");
        return DomainUpdateResult::none();
    }

    let Some(file) = upload.selected.clone() else {
        log::warn!("[Upload] Submit with no file selected");
        upload.last_outcome = Some(OperationOutcome::no_file_selected());
        return DomainUpdateResult::none();
    };

    upload.in_flight = true;
    let catalogue = Arc::clone(&state.catalogue);
    let task = Task::perform(
        async move { catalogue.upload_book(file).await },
        UploadMessage::Submitted,
    );
    DomainUpdateResult::task(task.map(DomainMessage::Upload))
        .add_event(CrossDomainEvent::OperationStarted(OperationKind::Upload))
}
