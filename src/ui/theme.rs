//! Bistro colors and spacing shared by the view functions

use cosmic::iced::Color;

/// Burgundy accent (#75000e) used for the title and price badges
pub const BURGUNDY: Color = Color::from_rgb(0.458_824, 0.0, 0.054_902);

/// Gap between cards and between grid rows
pub const GRID_SPACING: u16 = 16;

/// Height of the image area on a dish card
pub const CARD_IMAGE_HEIGHT: f32 = 160.0;

/// Text class for accented labels
pub fn accent_text() -> cosmic::theme::Text {
    cosmic::theme::Text::Color(BURGUNDY)
}
