//! Dish card for the menu grid
//!
//! A card shows the dish name, price badge, description and picture in the
//! active language, plus the two prompt buttons.

use crate::catalog::{ImageSource, MenuItem};
use crate::i18n::{tr, Language, UiText};
use crate::message::{ClipboardMessage, Message};
use crate::search::TaggedItem;
use crate::ui::theme;
use crate::utils::text::truncate;
use cosmic::iced::widget::image;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, horizontal_space, text, Column, Row};
use cosmic::Element;
use std::path::Path;

/// Longest remote URL shown inside a placeholder
const URL_HINT_CHARS: usize = 36;

/// Build a card for one dish
pub fn view_card<'a>(tagged: &'a TaggedItem, lang: Language, menu_dir: &Path) -> Element<'a, Message> {
    let item = &tagged.item;

    let mut title = Row::new()
        .push(text(item.display_name(lang)).size(18))
        .push(horizontal_space())
        .spacing(8)
        .align_y(Alignment::Center);
    if let Some(price) = item.price_label() {
        title = title.push(text(price).size(16).class(theme::accent_text()));
    }

    let mut body = Column::new()
        .push(view_picture(item.image_source(menu_dir)))
        .push(title)
        .spacing(8);

    let description = item.display_description(lang);
    if !description.is_empty() {
        body = body.push(text(description).size(13));
    }

    body = body.push(view_prompt_buttons(item, lang));

    container(body)
        .width(Length::Fill)
        .padding(12)
        .class(cosmic::theme::Container::Card)
        .into()
}

/// Both buttons copy the image prompt
fn view_prompt_buttons<'a>(item: &MenuItem, lang: Language) -> Element<'a, Message> {
    let prompt = item.prompt().into_owned();

    Row::new()
        .push(
            button::text(tr(lang, UiText::GenerateImage))
                .class(cosmic::theme::Button::Suggested)
                .on_press(Message::Clipboard(ClipboardMessage::CopyPrompt(prompt.clone()))),
        )
        .push(
            button::text(tr(lang, UiText::CopyPrompt))
                .class(cosmic::theme::Button::Standard)
                .on_press(Message::Clipboard(ClipboardMessage::CopyPrompt(prompt))),
        )
        .spacing(8)
        .into()
}

fn view_picture<'a>(source: ImageSource) -> Element<'a, Message> {
    let content: Element<'a, Message> = match source {
        ImageSource::Local(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(theme::CARD_IMAGE_HEIGHT))
            .into(),
        ImageSource::Remote(url) => Column::new()
            .push(text("🍽").size(40))
            .push(text(truncate(&url, URL_HINT_CHARS)).size(10))
            .spacing(4)
            .align_x(Alignment::Center)
            .into(),
        ImageSource::Placeholder => text("🍽").size(40).into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(theme::CARD_IMAGE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(theme::CARD_IMAGE_HEIGHT))
        .into()
}
