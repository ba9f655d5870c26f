use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            width: if palette.border.is_some() { 1.0 } else { 0.0 },
            color: palette.border.unwrap_or(iced::Color::TRANSPARENT),
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

pub fn info(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.info)
}
