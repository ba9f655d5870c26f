use iced::widget::svg::{Catalog, Status, Style, StyleFn};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    Style {
        color: Some(theme.colors.text.primary),
    }
}

pub fn secondary(theme: &Theme, _status: Status) -> Style {
    Style {
        color: Some(theme.colors.text.secondary),
    }
}

/// Icon placed on a primary button, follows the button label color.
pub fn on_primary(theme: &Theme, _status: Status) -> Style {
    Style {
        color: Some(theme.colors.buttons.primary.active.text),
    }
}
