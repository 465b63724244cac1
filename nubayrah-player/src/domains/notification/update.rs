use super::messages::NotificationMessage;
use crate::common::messages::{CrossDomainEvent, DomainUpdateResult};
use crate::state::State;

pub fn update_notification(
    state: &mut State,
    message: NotificationMessage,
) -> DomainUpdateResult {
    match message {
        NotificationMessage::Dismiss => {
            if state.domains.notification.state.dismiss() {
                // Applies whatever the severity was.
                DomainUpdateResult::none()
                    .add_event(CrossDomainEvent::RequestLibraryRefresh)
            } else {
                log::debug!(
                    "[Notification] Dismiss with nothing shown, ignoring"
                );
                DomainUpdateResult::none()
            }
        }
    }
}
