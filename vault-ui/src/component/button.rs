use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};
use std::fmt::Display;

pub fn primary<'a, T: 'a>(icon: Option<Svg<'a>>, t: impl Display) -> Button<'a, T> {
    Button::new(content(
        icon.map(|i| i.style(theme::svg::on_primary)),
        text(t)
            .font(MEDIUM)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Svg<'a>>, t: impl Display) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center),
    ))
    .style(theme::button::secondary)
}

/// Borderless button holding a single icon, sized to its content.
pub fn icon<'a, T: 'a>(icon: Svg<'a>) -> Button<'a, T> {
    Button::new(icon.style(theme::svg::secondary))
        .padding(5)
        .style(theme::button::link)
}

// Centered content for full width buttons.
fn content<'a, T: 'a>(icon: Option<Svg<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center)
            .width(iced::Length::Fill)
            .padding(5),
        Some(i) => container(
            row![i, text]
                .spacing(10)
                .align_y(Vertical::Center)
                .width(iced::Length::Shrink),
        )
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5),
    }
}
