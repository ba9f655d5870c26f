pub mod password;

use iced::{
    alignment::Horizontal,
    widget::center,
    Length, Subscription, Task,
};
use tracing::{info, warn};
use vault_ui::{
    component::{button, text},
    icon, theme,
    widget::*,
};

use crate::{
    config::Config,
    unlock::{self, UnlockDialog},
};
use password::{verify_password, UnlockError};

#[derive(Debug, Clone)]
pub enum Message {
    OpenDialog,
    CloseDialog,
    Dialog(unlock::Message),
    Unlock(String),
    Unlocked(Result<(), UnlockError>),
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Locked,
    Unlocked,
}

pub struct App {
    state: State,
    password_hash: Option<String>,
    dialog: UnlockDialog<Message>,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let dialog =
            UnlockDialog::new(config.dialog_config(), Message::Unlock).on_close(Message::CloseDialog);
        let mut app = Self {
            state: State::Locked,
            password_hash: config.password_hash,
            dialog,
        };
        app.dialog.open();
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.state {
            State::Locked => format!("Vault {} - Locked", crate::VERSION),
            State::Unlocked => format!("Vault {}", crate::VERSION),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn dialog(&self) -> &UnlockDialog<Message> {
        &self.dialog
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenDialog => {
                if self.state == State::Locked {
                    self.dialog.open();
                }
            }
            Message::CloseDialog => self.dialog.close(),
            Message::Dialog(msg) => {
                if let Some(msg) = self.dialog.update(msg) {
                    return Task::done(msg);
                }
            }
            Message::Unlock(password) => {
                // Withdraw the previous failure so that a repeated one is
                // displayed again.
                self.dialog.set_unlock_error(None);
                self.dialog.set_loading(true);
                let hash = self.password_hash.clone();
                return Task::perform(unlock(password, hash), Message::Unlocked);
            }
            Message::Unlocked(res) => {
                self.dialog.set_loading(false);
                match res {
                    Ok(()) => {
                        info!("Vault unlocked");
                        self.dialog.close();
                        self.state = State::Unlocked;
                    }
                    Err(e) => {
                        warn!("Failed to unlock vault: {}", e);
                        self.dialog.set_unlock_error(Some(e.to_string()));
                    }
                }
            }
            Message::Lock => {
                info!("Vault locked");
                self.state = State::Locked;
                self.dialog.open();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let base = match self.state {
            State::Locked => screen(
                icon::lock_icon(),
                "Vault locked",
                button::primary(Some(icon::lock_open_icon()), &self.dialog.config().unlock_text)
                    .on_press(Message::OpenDialog),
            ),
            State::Unlocked => screen(
                icon::lock_open_icon(),
                "Vault unlocked",
                button::secondary(Some(icon::lock_icon()), "Lock").on_press(Message::Lock),
            ),
        };
        self.dialog.view(base, Message::Dialog)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.dialog.subscription().map(Message::Dialog)
    }
}

fn screen<'a>(
    icon: Svg<'a>,
    title: &'static str,
    action: Button<'a, Message>,
) -> Element<'a, Message> {
    center(
        Column::new()
            .push(icon.width(Length::Fixed(48.0)).height(Length::Fixed(48.0)))
            .push(text::h3(title))
            .push(action.width(Length::Fixed(200.0)))
            .spacing(20)
            .align_x(Horizontal::Center),
    )
    .style(theme::container::background)
    .into()
}

// Argon2 is memory and CPU bound, keep it off the executor threads.
async fn unlock(password: String, hash: Option<String>) -> Result<(), UnlockError> {
    tokio::task::spawn_blocking(move || verify_password(&password, hash.as_deref()))
        .await
        .map_err(|e| UnlockError::Unexpected(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unlock::{form::UnlockForm, Dismiss};

    fn app() -> App {
        App::new(Config::default()).0
    }

    #[test]
    fn starts_locked_with_the_dialog_open() {
        let app = app();
        assert_eq!(app.state(), State::Locked);
        assert!(app.dialog().is_open());
        assert!(app.title().ends_with("Locked"));
    }

    #[test]
    fn unlock_attempt_sets_loading() {
        let mut app = app();
        let _ = app.update(Message::Unlock("secret".to_string()));
        assert!(app.dialog().is_loading());
    }

    #[test]
    fn failed_attempt_shows_the_error() {
        let mut app = app();
        for _ in 0..2 {
            let _ = app.update(Message::Unlock("secret".to_string()));
            let _ = app.update(Message::Unlocked(Err(UnlockError::WrongPassword)));
            assert!(!app.dialog().is_loading());
            assert!(app.dialog().is_open());
            assert_eq!(
                app.dialog().form().errors().password.as_deref(),
                Some("Wrong password")
            );
            assert_eq!(app.state(), State::Locked);
            let _ = app.update(Message::Dialog(unlock::Message::PasswordEdited(
                "secret2".to_string(),
            )));
        }
    }

    #[test]
    fn successful_attempt_unlocks() {
        let mut app = app();
        let _ = app.update(Message::Unlock("secret".to_string()));
        let _ = app.update(Message::Unlocked(Ok(())));
        assert_eq!(app.state(), State::Unlocked);
        assert!(!app.dialog().is_open());

        // Opening is a noop once unlocked.
        let _ = app.update(Message::OpenDialog);
        assert!(!app.dialog().is_open());

        let _ = app.update(Message::Lock);
        assert_eq!(app.state(), State::Locked);
        assert!(app.dialog().is_open());
        assert_eq!(app.dialog().form().values().password, "");
    }

    #[test]
    fn dismissed_dialog_can_be_reopened() {
        let mut app = app();
        let _ = app.update(Message::Dialog(unlock::Message::Dismiss(Dismiss::Escape)));
        // The dialog returns the close message, the host handles it next.
        let _ = app.update(Message::CloseDialog);
        assert!(!app.dialog().is_open());
        assert_eq!(app.state(), State::Locked);

        let _ = app.update(Message::OpenDialog);
        assert!(app.dialog().is_open());
    }

    #[test]
    fn verification_runs_on_a_blocking_thread() {
        let hash = password::hash_password("secret").unwrap();
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        assert_eq!(
            rt.block_on(unlock("secret".to_string(), Some(hash.clone()))),
            Ok(())
        );
        assert_eq!(
            rt.block_on(unlock("nope".to_string(), Some(hash))),
            Err(UnlockError::WrongPassword)
        );
    }

    #[test]
    fn view_builds() {
        let mut app = app();
        let _ = app.view();
        let _ = app.update(Message::Unlocked(Ok(())));
        let _ = app.view();
    }
}
