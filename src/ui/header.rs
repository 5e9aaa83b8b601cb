//! Page header: restaurant title, language toggle and search box

use crate::config::APP_TITLE;
use crate::i18n::{tr, Language, UiText};
use crate::message::{Message, SearchMessage, ViewMessage};
use crate::state::AppState;
use crate::ui::theme;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, horizontal_space, text, text_input, Row};
use cosmic::Element;

/// Width of the search input in pixels
const SEARCH_WIDTH: f32 = 280.0;

/// Build the header row
pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let lang = state.language();

    let row = Row::new()
        .push(text(APP_TITLE).size(24).class(theme::accent_text()))
        .push(horizontal_space())
        .push(view_language_toggle(lang))
        .push(view_search(state.query(), lang))
        .spacing(16)
        .align_y(Alignment::Center);

    container(row).width(Length::Fill).padding([12, 16]).into()
}

/// Three-way language toggle; the active language is highlighted
pub fn view_language_toggle<'a>(active: Language) -> Element<'a, Message> {
    Language::ALL
        .into_iter()
        .fold(Row::new().spacing(4), |row, lang| {
            row.push(
                button::text(lang.label())
                    .class(if lang == active {
                        cosmic::theme::Button::Suggested
                    } else {
                        cosmic::theme::Button::Standard
                    })
                    .on_press(Message::View(ViewMessage::SetLanguage(lang))),
            )
        })
        .into()
}

fn view_search<'a>(query: &'a str, lang: Language) -> Element<'a, Message> {
    let input = text_input(tr(lang, UiText::SearchPlaceholder), query)
        .on_input(|s| Message::Search(SearchMessage::UpdateQuery(s)))
        .width(Length::Fixed(SEARCH_WIDTH));

    let mut row = Row::new().push(input).spacing(4).align_y(Alignment::Center);
    if !query.is_empty() {
        row = row.push(
            button::text("✕")
                .class(cosmic::theme::Button::Text)
                .padding([4, 8])
                .on_press(Message::Search(SearchMessage::Clear)),
        );
    }
    row.into()
}
