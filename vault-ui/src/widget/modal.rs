//! A modal overlay drawn over some base element.
use iced::{
    alignment::Horizontal,
    widget::{center, container, mouse_area, opaque, stack},
    Length,
};

use crate::{component::button, icon, theme};

use super::Element;

pub const MODAL_WIDTH: u16 = 550;

/// Centers a modal element over a dimmed base element.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Option<Message>,
    close: Option<Message>,
}

impl<'a, Message> Modal<'a, Message> {
    /// Returns a new [`Modal`]
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            content: content.into(),
            on_blur: None,
            close: None,
        }
    }

    /// Sets the message that will be produced when the background
    /// of the [`Modal`] is pressed
    pub fn on_blur(self, on_blur: Option<Message>) -> Self {
        Self { on_blur, ..self }
    }

    /// Sets the message produced by the close button drawn in the top right
    /// corner of the content. No button is drawn if `None`.
    pub fn close(self, close: Option<Message>) -> Self {
        Self { close, ..self }
    }
}

impl<'a, Message> From<Modal<'a, Message>> for Element<'a, Message>
where
    Message: 'a + Clone,
{
    fn from(modal: Modal<'a, Message>) -> Self {
        let content: Element<'a, Message> = match modal.close {
            Some(close) => stack![
                modal.content,
                container(button::icon(icon::cross_icon()).on_press(close))
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(10),
            ]
            .into(),
            None => modal.content,
        };

        let backdrop = center(opaque(content)).style(theme::container::backdrop);
        let overlay = match modal.on_blur {
            Some(on_blur) => opaque(mouse_area(backdrop).on_press(on_blur)),
            None => opaque(backdrop),
        };

        stack![modal.base, overlay].into()
    }
}
