use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::row_actions::messages::RowActionMessage;
use crate::infra::api_types::BookRecord;
use crate::state::State;

const TITLE_PORTION: u16 = 4;
const AUTHOR_PORTION: u16 = 3;
const DATE_PORTION: u16 = 2;
const ID_PORTION: u16 = 3;
const ACTIONS_PORTION: u16 = 2;

pub fn view_catalogue(state: &State) -> Element<'_, DomainMessage> {
    let library = &state.domains.library.state;

    let body: Element<'_, DomainMessage> = if library.snapshot.is_empty() {
        let message = if library.reload.is_pending() {
            "Loading catalogue..."
        } else {
            "No books in the library yet"
        };
        container(text(message).style(text::secondary))
            .padding(24)
            .center_x(Length::Fill)
            .into()
    } else {
        let rows = library
            .snapshot
            .iter()
            .fold(column![].spacing(4), |rows, book| {
                rows.push(view_row(state, book))
            });
        scrollable(rows).height(Length::Fill).into()
    };

    column![view_header(), body].spacing(8).into()
}

fn view_header<'a>() -> Element<'a, DomainMessage> {
    row![
        text("Title").width(Length::FillPortion(TITLE_PORTION)),
        text("Author").width(Length::FillPortion(AUTHOR_PORTION)),
        text("Published").width(Length::FillPortion(DATE_PORTION)),
        text("ID").width(Length::FillPortion(ID_PORTION)),
        text("").width(Length::FillPortion(ACTIONS_PORTION)),
    ]
    .spacing(12)
    .padding([4, 8])
    .into()
}

fn view_row<'a>(
    state: &'a State,
    book: &'a BookRecord,
) -> Element<'a, DomainMessage> {
    let deleting = state.domains.row_actions.state.is_deleting(&book.id);

    let published = book
        .published_on()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| book.pub_date.clone());

    let cover = button(text("Cover").size(14))
        .style(button::secondary)
        .on_press(DomainMessage::RowAction(RowActionMessage::ViewCover(
            book.id.clone(),
        )));

    let delete = button(text("Delete").size(14))
        .style(button::danger)
        .on_press_maybe((!deleting).then(|| {
            DomainMessage::RowAction(RowActionMessage::RequestDelete(
                book.id.clone(),
            ))
        }));

    container(
        row![
            text(&book.title).width(Length::FillPortion(TITLE_PORTION)),
            text(&book.author).width(Length::FillPortion(AUTHOR_PORTION)),
            text(published).width(Length::FillPortion(DATE_PORTION)),
            text(book.id.as_str())
                .size(12)
                .style(text::secondary)
                .width(Length::FillPortion(ID_PORTION)),
            row![cover, delete]
                .spacing(6)
                .width(Length::FillPortion(ACTIONS_PORTION)),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 8])
    .style(container::rounded_box)
    .into()
}
