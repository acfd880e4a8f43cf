//! Widget style functions.
//!
//! Button styles follow the Iced 0.14 signature `fn(&Theme, Status) ->
//! Style`; container styles take only `&Theme`. Helpers that depend on a
//! runtime value (badge color, chip selection) return closures instead.

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::WHITE;
use super::spacing::{BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM};

// =============================================================================
// BUTTONS
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.background.weak.color,
    };
    let text_color = match status {
        button::Status::Disabled => palette.background.strong.color,
        _ => palette.primary.base.text,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Ghost button style - icon buttons, dismiss buttons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Numbered page button. The active page is filled, the rest are outlined.
pub fn button_page(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            button_primary(theme, status)
        } else {
            let palette = theme.extended_palette();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(palette.background.weak.color.into())
                }
                _ => None,
            };
            let text_color = match status {
                button::Status::Disabled => palette.background.strong.color,
                _ => palette.background.base.text,
            };
            button::Style {
                background,
                text_color,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: 1.0,
                    color: palette.background.strong.color,
                },
                ..Default::default()
            }
        }
    }
}

/// Type filter chip. Selected chips fill with the type color, unselected
/// ones show it as an outline.
pub fn type_chip(color: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();

        let (background, text_color) = if selected {
            (Some(color.into()), WHITE)
        } else {
            let hover = matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            );
            (
                hover.then(|| palette.background.weak.color.into()),
                palette.background.base.text,
            )
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 1.0,
                color,
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Record card container.
pub fn card_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Pill badge with a fixed background color.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(color.into()),
        text_color: Some(WHITE),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Failed-fetch panel.
pub fn error_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

/// Toast container, floats above the catalog.
pub fn toast_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}
