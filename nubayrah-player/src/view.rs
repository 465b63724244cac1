//! Root-level view composition

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::library::view::view_catalogue;
use crate::domains::notification::view::view_banner;
use crate::domains::upload::view::view_upload_panel;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let header = column![
        text("Nubayrah").size(28),
        text(&state.server_url).size(13).style(text::secondary),
    ]
    .spacing(2);

    let mut content = column![header].spacing(16);
    if let Some(banner) = view_banner(state) {
        content = content.push(banner);
    }
    content = content
        .push(view_upload_panel(state))
        .push(view_catalogue(state));

    container(content)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
