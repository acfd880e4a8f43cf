//! Theme and widget styling.
//!
//! Style functions receive `&Theme` and read the extended palette, so the
//! same helpers work in light and dark mode. Type badge colors are fixed
//! per tag and do not vary with the theme.

mod colors;
mod spacing;
mod styles;

use iced::Theme;

use crate::state::ThemeMode;

pub use colors::{type_color, ERROR, FAVORITE, WHITE};
pub use spacing::*;
pub use styles::{
    badge, button_ghost, button_page, button_primary, card_container, error_panel, toast_container,
    type_chip,
};

/// Resolve the Iced theme for a display mode.
pub fn app_theme(mode: ThemeMode) -> Theme {
    if mode.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
