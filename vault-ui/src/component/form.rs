use iced::{alignment::Vertical, widget::text_input, Length};

use crate::{component::text, theme, widget::*};

pub struct Form<'a, Message> {
    label: Option<Text<'a>>,
    input: TextInput<'a, Message>,
    trailing: Option<Element<'a, Message>>,
    warning: Option<&'a str>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: text_input::TextInput::new(placeholder, value).on_input(on_change),
            trailing: None,
            warning: None,
        }
    }

    /// Creates a new [`Form`] whose value is masked unless `visible` is set.
    pub fn new_password<F>(placeholder: &str, value: &str, visible: bool, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        let mut form = Self::new(placeholder, value, on_change);
        form.input = form.input.secure(!visible);
        form
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(text::p2_regular(label).style(theme::text::secondary));
        self
    }

    /// Sets the message produced when the user presses enter.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets an element displayed right of the input, like a visibility toggle.
    pub fn trailing(mut self, element: impl Into<Element<'a, Message>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    /// Sets the warning displayed under the input, if any.
    pub fn maybe_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let input = if form.warning.is_some() {
            form.input.style(theme::text_input::invalid)
        } else {
            form.input
        };
        Container::new(
            Column::new()
                .push_maybe(form.label)
                .push(
                    Row::new()
                        .push(input)
                        .push_maybe(form.trailing)
                        .spacing(5)
                        .align_y(Vertical::Center),
                )
                .push_maybe(
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
