//! Category sidebar
//!
//! Lists the categories that have dishes, in menu order, each with the
//! number of dishes matching the current search. The active category is
//! highlighted.

use crate::catalog::Category;
use crate::message::{Message, ViewMessage};
use crate::state::AppState;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{container, horizontal_space, scrollable, text, Column, Row};
use cosmic::Element;

/// Row height for category entries
const ROW_HEIGHT: u16 = 36;

/// Build the sidebar view
pub fn view_sidebar(state: &AppState, width: u16) -> Element<'_, Message> {
    let index = state.index();
    let active = state.active_category();

    let entries = state
        .available_categories()
        .into_iter()
        .fold(Column::new().spacing(2), |column, category| {
            column.push(view_category_entry(
                category,
                index.match_count(category),
                category == active,
            ))
        });

    container(scrollable(entries.padding(8)).height(Length::Fill))
        .width(Length::Fixed(width as f32))
        .height(Length::Fill)
        .class(cosmic::theme::Container::Card)
        .into()
}

/// Build a single category row
fn view_category_entry<'a>(category: Category, count: usize, is_active: bool) -> Element<'a, Message> {
    let row_content = Row::new()
        .push(text(category.label()).size(14))
        .push(horizontal_space())
        .push(text(count.to_string()).size(12))
        .spacing(8)
        .align_y(Alignment::Center)
        .padding([4, 8]);

    let clickable = cosmic::widget::button::custom(row_content)
        .class(if is_active {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Text
        })
        .on_press(Message::View(ViewMessage::SelectCategory(category)))
        .width(Length::Fill)
        .padding(0);

    container(clickable)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT as f32))
        .into()
}
