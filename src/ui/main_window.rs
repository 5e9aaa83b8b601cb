//! Main window layout and composition
//!
//! Header on top, category sidebar and card grid in the middle, then the
//! toast (when one is showing) and the footer.

use crate::config::Config;
use crate::i18n::{tr, UiText};
use crate::message::Message;
use crate::state::AppState;
use crate::ui::dish_card::view_card;
use crate::ui::header::view_header;
use crate::ui::sidebar::view_sidebar;
use crate::ui::theme;
use cosmic::iced::Length;
use cosmic::widget::{container, divider, horizontal_space, scrollable, text, Column, Row};
use cosmic::Element;

/// Build the main window view
pub fn view<'a>(state: &'a AppState, config: &Config, footer_year: i32) -> Element<'a, Message> {
    let mut main_row = Row::new();

    // Sidebar (if visible)
    if state.sidebar_visible {
        main_row = main_row.push(view_sidebar(state, config.sidebar_width));
    }
    main_row = main_row.push(view_grid(state, config.grid_columns));

    let mut column = Column::new()
        .push(view_header(state))
        .push(divider::horizontal::default())
        .push(container(main_row.spacing(8)).height(Length::Fill).padding(8));

    if let Some(toast) = state.toasts.current() {
        column = column.push(
            container(text(toast.text.as_str()).size(14))
                .padding([8, 16])
                .class(cosmic::theme::Container::Card)
                .center_x(Length::Fill),
        );
    }

    column
        .push(view_footer(footer_year))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Cards of the active category, `columns` per row
fn view_grid(state: &AppState, columns: usize) -> Element<'_, Message> {
    let lang = state.language();
    let items = state.visible_items();

    if items.is_empty() {
        let key = if state.index().is_filtered() && !state.document().is_empty() {
            UiText::NoMatches
        } else {
            UiText::EmptyMenu
        };
        return container(text(tr(lang, key)).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let columns = columns.max(1);
    let menu_dir = crate::utils::path::parent_dir(state.menu_path());

    let grid = items
        .chunks(columns)
        .fold(Column::new().spacing(theme::GRID_SPACING), |grid, chunk| {
            let mut row = Row::new().spacing(theme::GRID_SPACING);
            for tagged in chunk {
                row = row.push(
                    container(view_card(tagged, lang, &menu_dir)).width(Length::FillPortion(1)),
                );
            }
            // Pad the last row so cards keep the same width
            for _ in chunk.len()..columns {
                row = row.push(horizontal_space().width(Length::FillPortion(1)));
            }
            grid.push(row)
        });

    scrollable(container(grid).padding([0, 8]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Copyright line for `year`
pub fn footer_text(year: i32) -> String {
    format!("© {} Nissa La Bella · Bistro theme · Burgundy #75000e", year)
}

/// Second footer line
pub const FOOTER_TAGLINE: &str =
    "Nice backdrop · Promenade vibes · Use the language toggle and copy prompts to generate photos.";

fn view_footer<'a>(year: i32) -> Element<'a, Message> {
    container(
        Column::new()
            .push(text(footer_text(year)).size(11))
            .push(text(FOOTER_TAGLINE).size(11))
            .spacing(2),
    )
    .width(Length::Fill)
    .padding([6, 16])
    .into()
}
