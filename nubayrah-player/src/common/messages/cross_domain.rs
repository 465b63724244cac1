//! Cross-domain event coordination
//!
//! Events are applied synchronously, inside the update call that emitted
//! them, so a state change and its consequences land in one transition.

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::library::update_handlers::handle_request_reload;
use crate::state::State;
use iced::Task;

pub fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    log::debug!("[CrossDomain] Processing event: {:?}", event);

    match event {
        CrossDomainEvent::RequestLibraryRefresh => {
            handle_request_reload(state).map(DomainMessage::Library)
        }
        CrossDomainEvent::OperationStarted(operation) => {
            state.domains.notification.state.begin(operation);
            Task::none()
        }
        CrossDomainEvent::OperationCompleted { operation, outcome } => {
            state.domains.notification.state.show(operation, outcome);
            Task::none()
        }
    }
}
