use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use super::messages::NotificationMessage;
use super::types::Severity;
use crate::common::messages::DomainMessage;
use crate::state::State;

/// Banner for the last shown outcome, `None` while hidden or awaiting.
pub fn view_banner(state: &State) -> Option<Element<'_, DomainMessage>> {
    let notification = &state.domains.notification.state;
    let (operation, outcome, severity) = match (
        notification.operation(),
        notification.outcome(),
        notification.severity(),
    ) {
        (Some(operation), Some(outcome), Some(severity)) => {
            (operation, outcome, severity)
        }
        _ => return None,
    };

    let headline = match severity {
        Severity::Info => format!("{} succeeded", operation.label()),
        Severity::Failure => format!("{} failed", operation.label()),
    };
    let detail = match outcome.message() {
        Some(message) if outcome.status().is_some() => {
            format!("{} ({})", outcome.summary(), message)
        }
        _ => outcome.summary(),
    };

    Some(
        container(
            row![
                text(headline).width(Length::Shrink),
                text(detail).width(Length::Fill),
                button(text("Dismiss").size(14))
                    .style(button::secondary)
                    .on_press(DomainMessage::Notification(
                        NotificationMessage::Dismiss
                    )),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .padding(10)
        .width(Length::Fill)
        .style(move |theme: &Theme| banner_style(theme, severity))
        .into(),
    )
}

fn banner_style(theme: &Theme, severity: Severity) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match severity {
        Severity::Info => palette.success.weak,
        Severity::Failure => palette.danger.weak,
    };

    container::Style {
        text_color: Some(pair.text),
        background: Some(pair.color.into()),
        ..container::Style::default()
    }
}
