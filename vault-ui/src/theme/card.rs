use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

pub const RADIUS: f32 = 25.0;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: RADIUS.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: RADIUS.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn modal(theme: &Theme) -> Style {
    card(&theme.colors.cards.modal)
}
