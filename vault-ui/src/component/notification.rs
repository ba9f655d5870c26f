use std::fmt::Display;

use crate::{component::text, icon, theme, widget::*};
use iced::{widget::row, Alignment, Length};

/// Informational banner: icon followed by a short paragraph.
pub fn info<'a, T: 'a>(message: impl Display) -> Container<'a, T> {
    Container::new(
        row![
            icon::info_icon().style(theme::svg::secondary),
            text::p2_regular(message).width(Length::Fill),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([8, 10])
    .style(theme::notification::info)
    .width(Length::Fill)
}
