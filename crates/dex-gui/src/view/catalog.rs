//! The catalog view - the application's single screen.
//!
//! Top to bottom: title bar, search box, type filter chips, then either the
//! card grid, a loading placeholder, or the failed-fetch panel, and finally
//! the paging controls for the active mode. The detail overlay and the
//! toast stack on top.

use iced::widget::{Space, button, center, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use dex_core::{LoadState, PaginationMode};
use dex_model::TypeTag;

use crate::message::{CatalogMessage, Message};
use crate::state::AppState;
use crate::theme::{
    ERROR, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, button_page,
    button_primary, error_panel, type_chip, type_color,
};
use crate::view::card::view_card;
use crate::view::detail::view_detail;
use crate::view::toast::view_toast;

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Render the whole application.
pub fn view_catalog(state: &AppState) -> Element<'_, Message> {
    let base = column![
        view_header(state),
        view_search(state),
        view_type_filter(state),
        Space::new().height(SPACING_SM),
        view_body(state),
        view_paging(state),
    ]
    .spacing(SPACING_SM)
    .padding(SPACING_LG);

    let mut content: Element<'_, Message> = container(base)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // Detail overlay
    if let Some(record) = state.selected.and_then(|id| state.collection.find(id)) {
        content = view_detail(content, state, record);
    }

    // Toast floats bottom-right above everything
    if let Some(toast) = &state.toast {
        let layer = container(view_toast(toast))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End)
            .padding(SPACING_LG);
        content = stack![content, layer].into();
    }

    content
}

// =============================================================================
// HEADER
// =============================================================================

/// Title bar with the theme toggle and the pagination mode selector.
fn view_header(state: &AppState) -> Element<'_, Message> {
    let title = text("Pokédex").size(28);

    let theme_icon = if state.settings.display.theme.is_dark() {
        lucide::sun().size(16)
    } else {
        lucide::moon().size(16)
    };
    let theme_button = button(theme_icon)
        .on_press(Message::Catalog(CatalogMessage::ThemeToggled))
        .padding(SPACING_XS)
        .style(button_ghost);

    let mode_selector = view_mode_selector(state);

    row![
        title,
        Space::new().width(Length::Fill),
        mode_selector,
        Space::new().width(SPACING_MD),
        theme_button,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Replace/accumulate selector, disabled while a fetch is in flight.
fn view_mode_selector(state: &AppState) -> Element<'_, Message> {
    let in_flight = state.collection.is_in_flight();
    let current = state.collection.mode();

    let mut selector = row![].spacing(SPACING_XS);
    for mode in PaginationMode::ALL {
        let selected = mode == current;
        let on_press = (!in_flight && !selected)
            .then_some(Message::Catalog(CatalogMessage::PaginationModeSelected(mode)));

        selector = selector.push(
            button(text(mode.label()).size(12))
                .on_press_maybe(on_press)
                .padding([SPACING_XS, SPACING_SM])
                .style(button_page(selected)),
        );
    }
    selector.into()
}

// =============================================================================
// SEARCH AND FILTER
// =============================================================================

/// Search box with a clear button once text is entered.
fn view_search(state: &AppState) -> Element<'_, Message> {
    let input = iced::widget::text_input("Search by name...", &state.collection.filter.query)
        .on_input(|value| Message::Catalog(CatalogMessage::QueryChanged(value)))
        .padding(SPACING_SM)
        .width(Length::Fixed(320.0));

    let mut bar = row![lucide::search().size(16), input]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    if !state.collection.filter.query.is_empty() {
        bar = bar.push(
            button(lucide::x().size(14))
                .on_press(Message::Catalog(CatalogMessage::QueryCleared))
                .padding(SPACING_XS)
                .style(button_ghost),
        );
    }

    bar.into()
}

/// Two rows of type chips. Filtering is AND - a record must carry every
/// selected type.
fn view_type_filter(state: &AppState) -> Element<'_, Message> {
    let mut rows = column![].spacing(SPACING_XS);

    for chunk in TypeTag::ALL.chunks(TypeTag::ALL.len().div_ceil(2)) {
        let mut chips = row![].spacing(SPACING_XS);
        for &tag in chunk {
            let selected = state.collection.filter.selected_types.contains(&tag);
            chips = chips.push(
                button(text(tag.as_str()).size(11))
                    .on_press(Message::Catalog(CatalogMessage::TypeToggled(tag)))
                    .padding([2.0, SPACING_SM])
                    .style(type_chip(type_color(tag), selected)),
            );
        }
        rows = rows.push(chips);
    }

    rows.into()
}

// =============================================================================
// BODY
// =============================================================================

/// Grid, loading placeholder, or failure panel, depending on load state.
fn view_body(state: &AppState) -> Element<'_, Message> {
    if let LoadState::Failed { error, .. } = state.collection.load_state() {
        return view_error(error.user_message());
    }

    if state.collection.records().is_empty() {
        // First fetch still running
        return center(
            column![
                lucide::loader().size(40),
                text("Loading the catalog...").size(14),
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .into();
    }

    let visible = state.collection.visible();

    let status = if state.collection.filter.is_empty() {
        text(format!("{} loaded", state.collection.records().len())).size(12)
    } else {
        text(format!(
            "Showing {} of {} loaded",
            visible.len(),
            state.collection.records().len()
        ))
        .size(12)
    };

    let grid: Element<'_, Message> = if visible.is_empty() {
        center(
            column![
                lucide::search_x().size(32),
                text("No entries match the current filter").size(14),
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .into()
    } else {
        let mut grid = column![].spacing(SPACING_MD);
        for chunk in visible.chunks(GRID_COLUMNS) {
            let mut cards = row![].spacing(SPACING_MD);
            for record in chunk {
                cards = cards.push(view_card(state, record));
            }
            grid = grid.push(cards);
        }
        scrollable(container(grid).width(Length::Fill).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    };

    column![status, grid]
        .spacing(SPACING_SM)
        .height(Length::Fill)
        .into()
}

/// Failed-fetch panel with a retry button.
fn view_error(message: &str) -> Element<'_, Message> {
    let retry = button(
        row![lucide::refresh_cw().size(14), text("Retry").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Catalog(CatalogMessage::Retry))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    let panel = container(
        column![
            lucide::circle_alert().size(40).color(ERROR),
            text(message.to_string()).size(14),
            retry,
        ]
        .spacing(SPACING_MD)
        .align_x(Alignment::Center),
    )
    .padding(SPACING_LG)
    .style(error_panel);

    center(panel).into()
}

// =============================================================================
// PAGING
// =============================================================================

/// Paging controls for the active mode, disabled while a fetch is in flight.
fn view_paging(state: &AppState) -> Element<'_, Message> {
    match state.collection.mode() {
        PaginationMode::Replace => view_numbered_paging(state),
        PaginationMode::Accumulate => view_load_more(state),
    }
}

/// Numbered pages with prev/next chevrons (replace mode).
fn view_numbered_paging(state: &AppState) -> Element<'_, Message> {
    let window = state.collection.window();
    let in_flight = state.collection.is_in_flight();
    let total = window.total_pages().unwrap_or(1);

    let prev_enabled = !in_flight && window.page > 1;
    let next_enabled = !in_flight && window.page < total;

    let mut bar = row![].spacing(SPACING_XS).align_y(Alignment::Center);

    bar = bar.push(
        button(lucide::chevron_left().size(14))
            .on_press_maybe(prev_enabled.then_some(Message::Catalog(CatalogMessage::PrevPage)))
            .padding(SPACING_XS)
            .style(button_ghost),
    );

    for page in 1..=total {
        let active = page == window.page;
        let on_press =
            (!in_flight && !active).then_some(Message::Catalog(CatalogMessage::PageRequested(page)));
        bar = bar.push(
            button(text(page.to_string()).size(12))
                .on_press_maybe(on_press)
                .padding([SPACING_XS, SPACING_SM])
                .style(button_page(active)),
        );
    }

    bar = bar.push(
        button(lucide::chevron_right().size(14))
            .on_press_maybe(next_enabled.then_some(Message::Catalog(CatalogMessage::NextPage)))
            .padding(SPACING_XS)
            .style(button_ghost),
    );

    if in_flight {
        bar = bar
            .push(Space::new().width(SPACING_SM))
            .push(text("Loading...").size(12));
    }

    container(bar).width(Length::Fill).center_x(Length::Fill).into()
}

/// Load-more button with progress text (accumulate mode).
fn view_load_more(state: &AppState) -> Element<'_, Message> {
    let window = state.collection.window();
    let in_flight = state.collection.is_in_flight();
    let loaded = state.collection.records().len();

    let progress = match window.total_count {
        Some(total) => format!("{loaded} of {total} loaded"),
        None => format!("{loaded} loaded"),
    };

    let label = if in_flight { "Loading..." } else { "Load more" };
    let enabled = !in_flight && window.has_more;

    let load_more = button(text(label).size(14))
        .on_press_maybe(enabled.then_some(Message::Catalog(CatalogMessage::LoadMore)))
        .padding([SPACING_SM, SPACING_LG])
        .style(button_primary);

    let bar = row![text(progress).size(12), load_more]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

    container(bar).width(Length::Fill).center_x(Length::Fill).into()
}
