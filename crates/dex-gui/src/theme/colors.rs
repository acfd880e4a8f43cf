//! Fixed colors.
//!
//! Type badge colors follow the long-established community palette for the
//! eighteen types, one hex value per tag. These are identity colors and stay
//! the same in light and dark mode.

use iced::Color;

use dex_model::TypeTag;

/// White, for text on saturated badge backgrounds.
pub const WHITE: Color = Color::WHITE;

/// Error accents (failed fetch panel, error toast icon).
pub const ERROR: Color = Color::from_rgb8(0xDC, 0x26, 0x26);

/// Favorite heart fill.
pub const FAVORITE: Color = Color::from_rgb8(0xE7, 0x4C, 0x3C);

/// The badge color for a type tag.
pub fn type_color(tag: TypeTag) -> Color {
    match tag {
        TypeTag::Normal => Color::from_rgb8(0xA8, 0xA8, 0x78),
        TypeTag::Fire => Color::from_rgb8(0xF0, 0x80, 0x30),
        TypeTag::Water => Color::from_rgb8(0x68, 0x90, 0xF0),
        TypeTag::Electric => Color::from_rgb8(0xF8, 0xD0, 0x30),
        TypeTag::Grass => Color::from_rgb8(0x78, 0xC8, 0x50),
        TypeTag::Ice => Color::from_rgb8(0x98, 0xD8, 0xD8),
        TypeTag::Fighting => Color::from_rgb8(0xC0, 0x30, 0x28),
        TypeTag::Poison => Color::from_rgb8(0xA0, 0x40, 0xA0),
        TypeTag::Ground => Color::from_rgb8(0xE0, 0xC0, 0x68),
        TypeTag::Flying => Color::from_rgb8(0xA8, 0x90, 0xF0),
        TypeTag::Psychic => Color::from_rgb8(0xF8, 0x58, 0x88),
        TypeTag::Bug => Color::from_rgb8(0xA8, 0xB8, 0x20),
        TypeTag::Rock => Color::from_rgb8(0xB8, 0xA0, 0x38),
        TypeTag::Ghost => Color::from_rgb8(0x70, 0x58, 0x98),
        TypeTag::Dragon => Color::from_rgb8(0x70, 0x38, 0xF8),
        TypeTag::Dark => Color::from_rgb8(0x70, 0x58, 0x48),
        TypeTag::Steel => Color::from_rgb8(0xB8, 0xB8, 0xD0),
        TypeTag::Fairy => Color::from_rgb8(0xEE, 0x99, 0xAC),
    }
}
