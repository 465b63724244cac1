use iced::Task;

use crate::common::messages::{DomainMessage, DomainUpdateResult, cross_domain};
use crate::domains::library::update::update_library;
use crate::domains::notification::update::update_notification;
use crate::domains::row_actions::update::update_row_actions;
use crate::domains::upload::update::update_upload;
use crate::state::State;

/// Route a message to its domain, then apply the cross-domain events it
/// emitted before returning.
pub fn update(
    state: &mut State,
    message: DomainMessage,
) -> Task<DomainMessage> {
    log::trace!("[Update] {}", message.name());

    let DomainUpdateResult { task, events } = match message {
        DomainMessage::Library(msg) => update_library(state, msg),
        DomainMessage::Upload(msg) => update_upload(state, msg),
        DomainMessage::Notification(msg) => update_notification(state, msg),
        DomainMessage::RowAction(msg) => update_row_actions(state, msg),
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    for event in events {
        tasks.push(cross_domain::handle_event(state, event));
    }
    Task::batch(tasks)
}
