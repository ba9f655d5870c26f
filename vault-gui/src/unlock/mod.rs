//! Modal dialog asking for the password that unlocks the wallet.
//!
//! The dialog owns no unlock logic: a successful submission is turned into
//! the host message built by `on_unlock`, and the host reports back through
//! [`UnlockDialog::set_loading`] and [`UnlockDialog::set_unlock_error`].

pub mod form;
pub mod style;
mod view;

use iced::{
    event::{self, Event},
    keyboard::{self, key::Named, Key},
    window, Subscription,
};
use vault_ui::widget::{modal::Modal, Element};

use self::{
    form::{PasswordForm, UnlockForm},
    style::ContentLayout,
};

pub const DEFAULT_TITLE: &str = "Unlock Wallet";
pub const DEFAULT_UNLOCK_TEXT: &str = "Unlock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockDialogConfig {
    pub title: String,
    pub unlock_text: String,
    /// Fill the window instead of floating over the base view.
    pub fullscreen: bool,
    /// Let the modal primitive draw its own close button next to the header
    /// one. Always off in fullscreen.
    pub default_close: bool,
}

impl Default for UnlockDialogConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            unlock_text: DEFAULT_UNLOCK_TEXT.to_string(),
            fullscreen: false,
            default_close: false,
        }
    }
}

impl UnlockDialogConfig {
    pub fn new(title: Option<String>, unlock_text: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            unlock_text: unlock_text.unwrap_or_else(|| DEFAULT_UNLOCK_TEXT.to_string()),
            ..Default::default()
        }
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn default_close(mut self, default_close: bool) -> Self {
        self.default_close = default_close;
        self
    }

    pub fn layout(&self) -> ContentLayout {
        style::content_layout(self.fullscreen, self.default_close)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    Escape,
    Outside,
    CloseButton,
    DefaultCloseButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PasswordEdited(String),
    ToggleVisibility,
    Submit,
    Dismiss(Dismiss),
}

pub struct UnlockDialog<M, F = PasswordForm> {
    config: UnlockDialogConfig,
    form: F,
    open: bool,
    loading: bool,
    password_visible: bool,
    on_unlock: Box<dyn Fn(String) -> M>,
    on_close: Option<M>,
}

impl<M> UnlockDialog<M, PasswordForm> {
    pub fn new(config: UnlockDialogConfig, on_unlock: impl Fn(String) -> M + 'static) -> Self {
        Self::with_form(config, PasswordForm::new(), on_unlock)
    }
}

impl<M, F: UnlockForm> UnlockDialog<M, F> {
    pub fn with_form(
        config: UnlockDialogConfig,
        form: F,
        on_unlock: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            config,
            form,
            open: false,
            loading: false,
            password_visible: false,
            on_unlock: Box::new(on_unlock),
            on_close: None,
        }
    }

    /// Sets the message produced by the escape key, a press outside of the
    /// dialog or the close buttons. Without it these do nothing.
    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }

    pub fn config(&self) -> &UnlockDialogConfig {
        &self.config
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn open(&mut self) {
        if !self.open {
            self.form.reset();
            self.password_visible = false;
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Displays `error` on the password field. Supplying the value currently
    /// set again has no effect.
    pub fn set_unlock_error(&mut self, error: Option<String>) {
        self.form.set_error(error);
    }

    /// Returns the host message to process, if any.
    pub fn update(&mut self, message: Message) -> Option<M>
    where
        M: Clone,
    {
        if !self.open {
            return None;
        }
        match message {
            Message::PasswordEdited(password) => {
                self.form.set_password(password);
                None
            }
            Message::ToggleVisibility => {
                self.password_visible = !self.password_visible;
                None
            }
            Message::Submit => {
                if self.loading {
                    tracing::debug!("Unlock already in progress, submission ignored");
                    return None;
                }
                let on_unlock = &self.on_unlock;
                let res = self.form.submit(|values| on_unlock(values.password));
                if res.is_some() {
                    tracing::debug!("Unlock form submitted");
                }
                res
            }
            Message::Dismiss(reason) => {
                tracing::debug!("Unlock dialog dismissed: {:?}", reason);
                self.on_close.clone()
            }
        }
    }

    /// Message of the submit button, `None` disables it.
    pub fn submit_message(&self) -> Option<Message> {
        (self.open && !self.loading).then_some(Message::Submit)
    }

    /// Dismissal wired to the modal primitive's own close button, drawn only
    /// if `Some`.
    pub fn modal_close(&self) -> Option<Dismiss> {
        (self.open && self.config.layout().default_close)
            .then_some(Dismiss::DefaultCloseButton)
    }

    /// Dismissal wired to a press outside of the dialog card.
    pub fn modal_blur(&self) -> Option<Dismiss> {
        self.open.then_some(Dismiss::Outside)
    }

    /// Renders the dialog over `base` when open, `base` alone otherwise.
    pub fn view<'a, H>(
        &'a self,
        base: impl Into<Element<'a, H>>,
        wrap: fn(Message) -> H,
    ) -> Element<'a, H>
    where
        H: 'a + Clone,
    {
        if !self.open {
            return base.into();
        }
        let layout = self.config.layout();
        Modal::new(base, view::dialog(self, layout).map(wrap))
            .on_blur(self.modal_blur().map(|d| wrap(Message::Dismiss(d))))
            .close(self.modal_close().map(|d| wrap(Message::Dismiss(d))))
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.open {
            event::listen_with(escape_pressed)
        } else {
            Subscription::none()
        }
    }
}

// Text inputs capture the escape key to unfocus, the event status is ignored
// so that escape closes the dialog while typing too.
fn escape_pressed(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Dismiss(Dismiss::Escape)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        form::{UnlockFormErrors, UnlockFormValues, PASSWORD_REQUIRED},
        *,
    };
    use vault_ui::component::text;

    #[derive(Debug, Clone, PartialEq)]
    enum HostMessage {
        Unlock(String),
        Close,
        Dialog(Message),
    }

    fn dialog() -> UnlockDialog<HostMessage> {
        UnlockDialog::new(UnlockDialogConfig::default(), HostMessage::Unlock)
            .on_close(HostMessage::Close)
    }

    fn open_dialog() -> UnlockDialog<HostMessage> {
        let mut d = dialog();
        d.open();
        d
    }

    #[test]
    fn defaults_are_resolved_at_construction() {
        let config = UnlockDialogConfig::new(None, Some("Open vault".to_string()));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.unlock_text, "Open vault");
        assert!(!config.fullscreen);
        assert!(!dialog().is_open());
    }

    #[test]
    fn closed_dialog_ignores_messages() {
        let mut d = dialog();
        assert_eq!(
            d.update(Message::PasswordEdited("secret".to_string())),
            None
        );
        assert_eq!(d.update(Message::Submit), None);
        assert_eq!(d.update(Message::Dismiss(Dismiss::Escape)), None);
        assert_eq!(d.form().values().password, "");
    }

    #[test]
    fn submission_forwards_the_password_once() {
        let mut d = open_dialog();
        d.update(Message::PasswordEdited("hunter2 ".to_string()));
        assert_eq!(
            d.update(Message::Submit),
            Some(HostMessage::Unlock("hunter2 ".to_string()))
        );
        assert_eq!(d.update(Message::ToggleVisibility), None);
    }

    #[test]
    fn empty_submission_shows_required_error() {
        let mut d = open_dialog();
        assert_eq!(d.update(Message::Submit), None);
        assert_eq!(
            d.form().errors().password.as_deref(),
            Some(PASSWORD_REQUIRED)
        );
    }

    #[test]
    fn unlock_error_is_displayed_without_submission() {
        let mut d = dialog();
        d.set_unlock_error(Some("wrong password".to_string()));
        d.open();
        assert_eq!(
            d.form().errors().password.as_deref(),
            Some("wrong password")
        );
    }

    #[test]
    fn every_dismissal_produces_on_close() {
        let mut d = open_dialog();
        for reason in [Dismiss::Escape, Dismiss::Outside, Dismiss::CloseButton] {
            assert_eq!(d.update(Message::Dismiss(reason)), Some(HostMessage::Close));
        }
    }

    #[test]
    fn dismissal_without_on_close_is_a_noop() {
        let mut d: UnlockDialog<HostMessage> =
            UnlockDialog::new(UnlockDialogConfig::default(), HostMessage::Unlock);
        d.open();
        for reason in [Dismiss::Escape, Dismiss::Outside, Dismiss::CloseButton] {
            assert_eq!(d.update(Message::Dismiss(reason)), None);
        }
        assert!(d.is_open());
    }

    #[test]
    fn fullscreen_suppresses_default_close_only() {
        let config = UnlockDialogConfig::default()
            .default_close(true)
            .fullscreen(true);
        assert!(!config.layout().default_close);

        let mut d = UnlockDialog::new(config, HostMessage::Unlock).on_close(HostMessage::Close);
        d.open();
        assert_eq!(
            d.update(Message::Dismiss(Dismiss::CloseButton)),
            Some(HostMessage::Close)
        );
    }

    #[test]
    fn loading_blocks_submission() {
        let mut d = open_dialog();
        d.update(Message::PasswordEdited("secret".to_string()));
        d.set_loading(true);
        assert_eq!(d.update(Message::Submit), None);
        assert_eq!(d.update(Message::Submit), None);
        d.set_loading(false);
        assert_eq!(
            d.update(Message::Submit),
            Some(HostMessage::Unlock("secret".to_string()))
        );
    }

    #[test]
    fn reopening_clears_the_password() {
        let mut d = open_dialog();
        d.update(Message::PasswordEdited("secret".to_string()));
        d.update(Message::ToggleVisibility);
        d.close();
        d.open();
        assert_eq!(d.form().values().password, "");
        assert!(!d.password_visible);
    }

    #[test]
    fn other_events_do_not_dismiss() {
        let event = Event::Window(window::Event::Focused);
        assert_eq!(
            escape_pressed(event, event::Status::Ignored, window::Id::unique()),
            None
        );
    }

    #[derive(Default)]
    struct FakeForm {
        values: UnlockFormValues,
        errors: UnlockFormErrors,
        submissions: usize,
    }

    impl UnlockForm for FakeForm {
        fn values(&self) -> &UnlockFormValues {
            &self.values
        }
        fn errors(&self) -> &UnlockFormErrors {
            &self.errors
        }
        fn set_password(&mut self, password: String) {
            self.values.password = password;
        }
        fn set_error(&mut self, error: Option<String>) {
            self.errors.password = error;
        }
        fn submit<T, F>(&mut self, handler: F) -> Option<T>
        where
            F: FnOnce(UnlockFormValues) -> T,
        {
            self.submissions += 1;
            Some(handler(self.values.clone()))
        }
        fn reset(&mut self) {}
    }

    #[test]
    fn validation_is_delegated_to_the_form() {
        let mut d = UnlockDialog::with_form(
            UnlockDialogConfig::default(),
            FakeForm::default(),
            HostMessage::Unlock,
        );
        d.open();
        // The fake accepts an empty password, the dialog does not check it.
        assert_eq!(
            d.update(Message::Submit),
            Some(HostMessage::Unlock(String::new()))
        );
        assert_eq!(d.form().submissions, 1);

        d.set_unlock_error(Some("wrong password".to_string()));
        assert_eq!(
            d.form().errors().password.as_deref(),
            Some("wrong password")
        );
    }

    #[test]
    fn closed_dialog_wires_nothing() {
        let d = dialog();
        assert_eq!(d.submit_message(), None);
        assert_eq!(d.modal_blur(), None);
        assert_eq!(d.modal_close(), None);
    }

    #[test]
    fn open_dialog_wires_submit_and_blur() {
        let d = open_dialog();
        assert_eq!(d.submit_message(), Some(Message::Submit));
        assert_eq!(d.modal_blur(), Some(Dismiss::Outside));
        // The default close is off unless configured.
        assert_eq!(d.modal_close(), None);
    }

    #[test]
    fn loading_disables_the_submit_button() {
        let mut d = open_dialog();
        d.set_loading(true);
        assert_eq!(d.submit_message(), None);
        d.set_loading(false);
        assert_eq!(d.submit_message(), Some(Message::Submit));
    }

    #[test]
    fn modal_close_follows_the_layout() {
        let mut d = UnlockDialog::new(
            UnlockDialogConfig::default().default_close(true),
            HostMessage::Unlock,
        )
        .on_close(HostMessage::Close);
        d.open();
        assert_eq!(d.modal_close(), Some(Dismiss::DefaultCloseButton));
        assert_eq!(
            d.update(Message::Dismiss(Dismiss::DefaultCloseButton)),
            Some(HostMessage::Close)
        );

        let mut d = UnlockDialog::new(
            UnlockDialogConfig::default()
                .default_close(true)
                .fullscreen(true),
            HostMessage::Unlock,
        );
        d.open();
        assert_eq!(d.modal_close(), None);
        assert_eq!(d.modal_blur(), Some(Dismiss::Outside));
    }

    #[test]
    fn caller_error_does_not_block_resubmission() {
        let mut d = open_dialog();
        d.update(Message::PasswordEdited("secret".to_string()));
        assert_eq!(
            d.update(Message::Submit),
            Some(HostMessage::Unlock("secret".to_string()))
        );
        d.set_unlock_error(Some("Unexpected error: timeout".to_string()));
        assert_eq!(
            d.update(Message::Submit),
            Some(HostMessage::Unlock("secret".to_string()))
        );
        assert!(d.form().errors().is_empty());
    }

    #[test]
    fn view_builds_in_every_state() {
        let mut d = dialog();
        let _ = d.view(text::text("base"), HostMessage::Dialog);
        d.open();
        d.set_loading(true);
        d.set_unlock_error(Some("wrong password".to_string()));
        let _ = d.view(text::text("base"), HostMessage::Dialog);

        let mut d = UnlockDialog::new(
            UnlockDialogConfig::default().fullscreen(true),
            HostMessage::Unlock,
        );
        d.open();
        let _ = d.view(text::text("base"), HostMessage::Dialog);
    }
}
