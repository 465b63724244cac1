use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};
use reqwest::StatusCode;

use super::messages::UploadMessage;
use crate::common::messages::DomainMessage;
use crate::state::State;

pub fn view_upload_panel(state: &State) -> Element<'_, DomainMessage> {
    let upload = &state.domains.upload.state;

    let path = text_input("Path to an .epub file", &upload.path_input)
        .on_input(|value| {
            DomainMessage::Upload(UploadMessage::PathInputChanged(value))
        })
        .on_submit(DomainMessage::Upload(UploadMessage::LoadPathInput))
        .width(Length::Fill);

    let load = button(text("Select"))
        .style(button::secondary)
        .on_press_maybe((!upload.reading_file).then_some(DomainMessage::Upload(
            UploadMessage::LoadPathInput,
        )));

    let submit = button(text(if upload.in_flight {
        "Uploading..."
    } else {
        "Upload"
    }))
    .style(button::primary)
    .on_press_maybe(
        (!upload.in_flight)
            .then_some(DomainMessage::Upload(UploadMessage::Submit)),
    );

    let selected = match &upload.selected {
        Some(file) => {
            text(format!("{} ({} bytes)", file.file_name, file.len()))
        }
        None => text("No file selected").style(text::secondary),
    };

    let mut panel = column![
        row![path, load, submit]
            .spacing(8)
            .align_y(Alignment::Center),
        selected.size(13),
    ]
    .spacing(6);

    if let Some(label) = upload.status_label() {
        let created = upload
            .last_outcome
            .as_ref()
            .is_some_and(|outcome| outcome.has_status(StatusCode::CREATED));
        let status = text(label).size(13);
        panel = panel.push(if created {
            status.style(text::success)
        } else {
            status.style(text::danger)
        });
    }

    panel.into()
}
