use iced::{widget::container, Border, Length};
use vault_ui::{
    theme::{self, Theme},
    widget::modal::MODAL_WIDTH,
};

pub const SPACING: u16 = 15;

/// Layout of the dialog card, derived from the dialog configuration on every
/// render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    pub width: Length,
    pub max_width: f32,
    pub height: Length,
    pub radius: f32,
    pub padding: u16,
    /// Whether the modal primitive draws its own close button.
    pub default_close: bool,
}

pub fn content_layout(fullscreen: bool, default_close: bool) -> ContentLayout {
    if fullscreen {
        ContentLayout {
            width: Length::Fill,
            max_width: f32::INFINITY,
            height: Length::Fill,
            radius: 0.0,
            padding: 30,
            default_close: false,
        }
    } else {
        ContentLayout {
            width: Length::Fixed(MODAL_WIDTH as f32),
            max_width: MODAL_WIDTH as f32,
            height: Length::Shrink,
            radius: theme::card::RADIUS,
            padding: 25,
            default_close,
        }
    }
}

pub fn content(layout: ContentLayout) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let style = theme::card::modal(theme);
        container::Style {
            border: Border {
                radius: layout.radius.into(),
                ..style.border
            },
            ..style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_fills_the_window() {
        let layout = content_layout(true, true);
        assert_eq!(layout.width, Length::Fill);
        assert_eq!(layout.height, Length::Fill);
        assert_eq!(layout.radius, 0.0);
        assert!(!layout.default_close);
    }

    #[test]
    fn popup_keeps_the_default_close_flag() {
        let layout = content_layout(false, true);
        assert_eq!(layout.width, Length::Fixed(MODAL_WIDTH as f32));
        assert_eq!(layout.height, Length::Shrink);
        assert!(layout.default_close);
        assert!(!content_layout(false, false).default_close);
    }

    #[test]
    fn fullscreen_card_has_square_corners() {
        let theme = <Theme as Default>::default();
        let style = content(content_layout(true, false))(&theme);
        assert_eq!(style.border.radius, 0.0.into());
        let style = content(content_layout(false, false))(&theme);
        assert_eq!(style.border.radius, theme::card::RADIUS.into());
    }
}
