//! Form state of the unlock dialog.
//!
//! The dialog never validates anything itself: it reads values and errors
//! from an [`UnlockForm`] and wraps its submit handler with
//! [`UnlockForm::submit`].

pub const PASSWORD_REQUIRED: &str = "Password is required";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockFormValues {
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockFormErrors {
    pub password: Option<String>,
}

impl UnlockFormErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none()
    }
}

pub trait UnlockForm {
    fn values(&self) -> &UnlockFormValues;

    fn errors(&self) -> &UnlockFormErrors;

    /// Updates the password as the user types.
    fn set_password(&mut self, password: String);

    /// Sets an error on the password field from outside the form, typically
    /// the outcome of a failed unlock attempt.
    fn set_error(&mut self, error: Option<String>);

    /// Validates the form and calls `handler` with its values if valid.
    fn submit<T, F>(&mut self, handler: F) -> Option<T>
    where
        F: FnOnce(UnlockFormValues) -> T;

    /// Clears values and validation state.
    fn reset(&mut self);
}

/// Default [`UnlockForm`]: a required password field, re-validated on every
/// change.
#[derive(Debug, Default)]
pub struct PasswordForm {
    values: UnlockFormValues,
    errors: UnlockFormErrors,
    // Last error set with `set_error`, equal values are not applied twice.
    manual_error: Option<String>,
    // The manual error is displayed, the field was not edited or submitted since.
    manual_pending: bool,
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> Option<String> {
        if self.values.password.is_empty() {
            Some(PASSWORD_REQUIRED.to_string())
        } else {
            None
        }
    }
}

impl UnlockForm for PasswordForm {
    fn values(&self) -> &UnlockFormValues {
        &self.values
    }

    fn errors(&self) -> &UnlockFormErrors {
        &self.errors
    }

    fn set_password(&mut self, password: String) {
        self.values.password = password;
        self.manual_pending = false;
        self.errors.password = self.validate();
    }

    fn set_error(&mut self, error: Option<String>) {
        if self.manual_error == error {
            return;
        }
        match &error {
            Some(_) => {
                self.errors.password = error.clone();
                self.manual_pending = true;
            }
            None if self.manual_pending => {
                self.errors.password = None;
                self.manual_pending = false;
            }
            None => {}
        }
        self.manual_error = error;
    }

    fn submit<T, F>(&mut self, handler: F) -> Option<T>
    where
        F: FnOnce(UnlockFormValues) -> T,
    {
        // Validation replaces a manual error, the caller sets it again if the
        // new attempt fails too.
        self.manual_pending = false;
        self.errors.password = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        Some(handler(self.values.clone()))
    }

    fn reset(&mut self) {
        self.values = UnlockFormValues::default();
        self.errors = UnlockFormErrors::default();
        // Keep the caller's error displayed on a fresh form.
        self.manual_pending = self.manual_error.is_some();
        self.errors.password = self.manual_error.clone();
    }
}
