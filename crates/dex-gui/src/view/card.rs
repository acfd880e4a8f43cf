//! A single record card in the catalog grid.

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use dex_model::{Record, TypeTag};

use crate::message::{CatalogMessage, Message};
use crate::state::AppState;
use crate::theme::{
    FAVORITE, SPACING_SM, SPACING_XS, SPRITE_SIZE, badge, button_ghost, card_container, type_color,
};

/// Card width in the grid.
pub const CARD_WIDTH: f32 = 250.0;

/// Render one record card.
///
/// The whole card is clickable and opens the detail overlay; the heart in
/// the corner toggles the favorite without opening it.
pub fn view_card<'a>(state: &'a AppState, record: &'a Record) -> Element<'a, Message> {
    let heart = if state.collection.is_favorite(record.id) {
        lucide::heart().size(16).color(FAVORITE)
    } else {
        lucide::heart().size(16)
    };
    let heart_button = button(heart)
        .on_press(Message::Catalog(CatalogMessage::FavoriteToggled(record.id)))
        .padding(SPACING_XS)
        .style(button_ghost);

    let header = row![
        text(record.formatted_id()).size(12),
        Space::new().width(Length::Fill),
        heart_button,
    ]
    .align_y(Alignment::Center);

    let sprite: Element<'_, Message> = match state.sprite(record.id) {
        Some(handle) => image(handle.clone())
            .width(SPRITE_SIZE)
            .height(SPRITE_SIZE)
            .into(),
        None => container(lucide::image().size(32)).center(SPRITE_SIZE).into(),
    };

    let name = text(record.display_name()).size(16);

    let mut badges = row![].spacing(SPACING_XS);
    for tag_name in record.type_names() {
        badges = badges.push(type_badge(tag_name));
    }

    let body = column![
        header,
        container(sprite).width(Length::Fill).center_x(Length::Fill),
        Space::new().height(SPACING_XS),
        name,
        badges,
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center);

    let card = container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(SPACING_SM)
        .style(card_container);

    button(card)
        .on_press(Message::Catalog(CatalogMessage::RecordSelected(record.id)))
        .padding(0)
        .style(button_ghost)
        .into()
}

/// A colored pill for one type name.
///
/// Unknown names (future types the palette does not cover) fall back to the
/// normal-type color rather than being dropped.
pub fn type_badge(tag_name: &str) -> Element<'_, Message> {
    let color = TypeTag::from_str_opt(tag_name)
        .map(type_color)
        .unwrap_or_else(|| type_color(TypeTag::Normal));

    container(text(tag_name).size(11))
        .padding([2.0, SPACING_SM])
        .style(badge(color))
        .into()
}
