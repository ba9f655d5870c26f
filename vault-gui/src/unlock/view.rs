use iced::{
    alignment::Vertical,
    widget::{container, Space},
    Length,
};
use vault_ui::{
    component::{button, form, notification, text},
    icon, theme,
    widget::*,
};

use super::{
    form::UnlockForm,
    style::{self, ContentLayout, SPACING},
    Dismiss, Message, UnlockDialog,
};

pub const INFO_MESSAGE: &str =
    "You need to unlock your wallet to be able to make transactions and more-sensitive actions.";
pub const PASSWORD_LABEL: &str = "Password";
pub const PASSWORD_PLACEHOLDER: &str = "Your password";
pub const LOADING_TEXT: &str = "Unlocking...";

pub fn dialog<'a, M, F: UnlockForm>(
    state: &'a UnlockDialog<M, F>,
    layout: ContentLayout,
) -> Element<'a, Message> {
    let fill = layout.height == Length::Fill;

    let body = Column::new()
        .push(notification::info(INFO_MESSAGE))
        .push(password_field(state))
        .spacing(SPACING)
        .height(if fill { Length::Fill } else { Length::Shrink });

    let label: &str = if state.loading {
        LOADING_TEXT
    } else {
        &state.config.unlock_text
    };
    let submit = button::primary(Some(icon::lock_open_icon()), label)
        .width(Length::Fill)
        .padding(5)
        .on_press_maybe(state.submit_message());

    container(
        Column::new()
            .push(header(&state.config.title))
            .push(body)
            .push(submit)
            .spacing(SPACING * 2),
    )
    .width(layout.width)
    .max_width(layout.max_width)
    .height(layout.height)
    .padding(layout.padding)
    .style(style::content(layout))
    .into()
}

fn header(title: &str) -> Row<'_, Message> {
    Row::new()
        .push(
            Row::new()
                .push(icon::lock_open_icon().style(theme::svg::secondary))
                .push(text::h4_bold(title))
                .spacing(10)
                .align_y(Vertical::Center),
        )
        .push(Space::with_width(Length::Fill))
        .push(button::icon(icon::cross_icon()).on_press(Message::Dismiss(Dismiss::CloseButton)))
        .align_y(Vertical::Center)
}

fn password_field<'a, M, F: UnlockForm>(state: &'a UnlockDialog<M, F>) -> Element<'a, Message> {
    let toggle = button::icon(if state.password_visible {
        icon::eye_slash_icon()
    } else {
        icon::eye_icon()
    })
    .on_press(Message::ToggleVisibility);

    let field = form::Form::new_password(
        PASSWORD_PLACEHOLDER,
        &state.form.values().password,
        state.password_visible,
        Message::PasswordEdited,
    )
    .label(PASSWORD_LABEL)
    .trailing(toggle)
    .maybe_warning(state.form.errors().password.as_deref())
    .padding(10);

    if state.loading {
        field.into()
    } else {
        field.on_submit(Message::Submit).into()
    }
}
