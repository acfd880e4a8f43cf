//! Toast notification.
//!
//! A temporary message at the bottom-right of the window. Auto-dismisses
//! after a timeout (see the app subscription) or via the dismiss button.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{Toast, ToastKind};
use crate::theme::{ERROR, SPACING_MD, SPACING_SM, button_ghost, toast_container};

/// Render the toast.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let icon = match toast.kind {
        ToastKind::Warning => lucide::triangle_alert().size(18),
        ToastKind::Error => lucide::circle_x().size(18).color(ERROR),
    };

    let dismiss = button(lucide::x().size(14))
        .on_press(Message::ToastDismissed)
        .padding(2)
        .style(button_ghost);

    let content = row![
        icon,
        text(&toast.message).size(14),
        Space::new().width(SPACING_SM),
        dismiss,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .style(toast_container)
        .into()
}
