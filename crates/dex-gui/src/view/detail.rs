//! Modal detail overlay for one record.
//!
//! Stacks a backdrop and a centered dialog over the catalog, the same layer
//! order as any modal: base, opaque backdrop, dialog. Closing goes through
//! the corner button or Escape; clicking the backdrop does nothing.

use iced::widget::{
    Space, button, center, column, container, image, opaque, progress_bar, row, stack, text,
};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use dex_model::Record;

use crate::message::{CatalogMessage, Message};
use crate::state::AppState;
use crate::theme::{
    ARTWORK_SIZE, BORDER_RADIUS_LG, FAVORITE, MODAL_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS,
    button_ghost,
};
use crate::view::card::type_badge;

/// Upstream maximum for a single base stat; bars are scaled against it.
const STAT_MAX: f32 = 255.0;

/// Render the detail overlay on top of the catalog.
pub fn view_detail<'a>(
    base: Element<'a, Message>,
    state: &'a AppState,
    record: &'a Record,
) -> Element<'a, Message> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
            ..Default::default()
        });

    let dialog = container(view_dialog(state, record))
        .width(Length::Fixed(MODAL_WIDTH))
        .padding(SPACING_MD)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    radius: BORDER_RADIUS_LG.into(),
                    width: 1.0,
                    color: palette.background.strong.color,
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 24.0,
                },
                ..Default::default()
            }
        });

    stack![base, opaque(backdrop), center(dialog)].into()
}

fn view_dialog<'a>(state: &'a AppState, record: &'a Record) -> Element<'a, Message> {
    let heart = if state.collection.is_favorite(record.id) {
        lucide::heart().size(18).color(FAVORITE)
    } else {
        lucide::heart().size(18)
    };

    let header = row![
        text(record.display_name()).size(22),
        text(record.formatted_id()).size(14),
        Space::new().width(Length::Fill),
        button(heart)
            .on_press(Message::Catalog(CatalogMessage::FavoriteToggled(record.id)))
            .padding(SPACING_XS)
            .style(button_ghost),
        button(lucide::x().size(18))
            .on_press(Message::Catalog(CatalogMessage::DetailClosed))
            .padding(SPACING_XS)
            .style(button_ghost),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let artwork: Element<'_, Message> = match state.sprite(record.id) {
        Some(handle) => image(handle.clone())
            .width(ARTWORK_SIZE)
            .height(ARTWORK_SIZE)
            .into(),
        None => container(lucide::image().size(48)).center(ARTWORK_SIZE).into(),
    };

    let mut badges = row![].spacing(SPACING_XS);
    for tag_name in record.type_names() {
        badges = badges.push(type_badge(tag_name));
    }

    let mut measurements = row![
        measurement("Height", format!("{:.1} m", record.height_m())),
        measurement("Weight", format!("{:.1} kg", record.weight_kg())),
    ]
    .spacing(SPACING_MD);
    if let Some(xp) = record.base_experience {
        measurements = measurements.push(measurement("Base XP", xp.to_string()));
    }

    let mut stats = column![text("Base stats").size(14)].spacing(SPACING_XS);
    for entry in &record.stats {
        stats = stats.push(view_stat_row(&entry.stat.name, entry.base_stat));
    }

    let mut abilities = row![text("Abilities:").size(12)].spacing(SPACING_XS);
    for slot in &record.abilities {
        let label = if slot.is_hidden {
            format!("{} (hidden)", slot.ability.name)
        } else {
            slot.ability.name.clone()
        };
        abilities = abilities.push(text(label).size(12));
    }

    column![
        header,
        container(artwork).width(Length::Fill).center_x(Length::Fill),
        container(badges).width(Length::Fill).center_x(Length::Fill),
        Space::new().height(SPACING_XS),
        container(measurements).width(Length::Fill).center_x(Length::Fill),
        Space::new().height(SPACING_SM),
        stats,
        abilities,
    ]
    .spacing(SPACING_SM)
    .into()
}

/// Label over value, for the height/weight/XP row.
fn measurement<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![text(label).size(11), text(value).size(14)]
        .spacing(2)
        .align_x(Alignment::Center)
        .into()
}

/// One stat name, bar, and number.
fn view_stat_row(name: &str, value: u32) -> Element<'_, Message> {
    row![
        container(text(name.to_string()).size(11)).width(Length::Fixed(120.0)),
        progress_bar(0.0..=STAT_MAX, value as f32).girth(8.0),
        container(text(value.to_string()).size(11)).width(Length::Fixed(36.0)),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
