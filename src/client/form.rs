/**
 * Login/Registration Form State Machine
 *
 * A two-mode form: `SigningIn` (initial) and `Registering`, toggled
 * only by user action. Registration is simulated entirely in local
 * state: the last registered email/password pair is held in a single
 * slot and the next sign-in is compared against it.
 *
 * The API client is invoked on successful submits for its side effect
 * (the backend issues and the client persists a token), but the form's
 * own pass/fail decision comes from the local comparison alone; a
 * failed network call is logged and otherwise ignored.
 */

use regex::Regex;
use std::sync::LazyLock;

use crate::client::api::AuthApi;

// Client-facing strings. These are part of the form's contract; tests
// assert on them verbatim.
pub const MSG_FILL_BOTH: &str = "Please fill in both fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_WEAK_PASSWORD: &str =
    "Password must be at least 6 characters long and include a special symbol.";
pub const MSG_REGISTERED: &str = "Registration successful! You can now sign in.";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful!";
pub const MSG_BAD_CREDENTIALS: &str =
    "Your credentials are incorrect. Please try again or register.";
pub const MSG_NO_REGISTRATION: &str = "No user registered yet. Please sign up first.";
pub const MSG_RESET_SENT: &str = "Password reset link sent to your email (simulation).";
pub const MSG_NOT_REGISTERED_EMAIL: &str =
    "Please enter your registered email address to reset password.";

/// Characters that satisfy the special-symbol password rule
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validate an email address
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a password: at least 6 characters and one special symbol
pub fn validate_password(password: &str) -> bool {
    password.len() >= 6 && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Form mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Sign-in mode (initial)
    #[default]
    SigningIn,
    /// Registration mode
    Registering,
}

/// The single-slot registered credential pair
#[derive(Debug, Clone, PartialEq, Eq)]
struct RegisteredCredential {
    email: String,
    password: String,
}

/// Login/registration form state
///
/// All transitions are synchronous and local. `error` and `message` are
/// mutually exclusive in practice: each action clears both before
/// setting one.
pub struct LoginForm {
    /// Email input field
    pub email: String,
    /// Password input field
    pub password: String,
    mode: FormMode,
    registered: Option<RegisteredCredential>,
    error: Option<String>,
    message: Option<String>,
    on_login: Option<Box<dyn FnMut()>>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            mode: FormMode::SigningIn,
            registered: None,
            error: None,
            message: None,
            on_login: None,
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("mode", &self.mode)
            .field("registered", &self.registered.is_some())
            .field("error", &self.error)
            .field("message", &self.message)
            .finish()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion callback invoked on successful sign-in
    pub fn on_login(&mut self, callback: impl FnMut() + 'static) {
        self.on_login = Some(Box::new(callback));
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_error(&mut self, error: &str) {
        self.error = Some(error.to_string());
    }

    fn set_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    /// Toggle between sign-in and registration mode
    ///
    /// Clears any previous error/message; input fields are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::SigningIn => FormMode::Registering,
            FormMode::Registering => FormMode::SigningIn,
        };
        self.error = None;
        self.message = None;
    }

    fn validate(&mut self) -> bool {
        if self.email.is_empty() || self.password.is_empty() {
            self.set_error(MSG_FILL_BOTH);
            return false;
        }
        if !validate_email(&self.email) {
            self.set_error(MSG_INVALID_EMAIL);
            return false;
        }
        if !validate_password(&self.password) {
            self.set_error(MSG_WEAK_PASSWORD);
            return false;
        }
        true
    }

    /// Submit the form in its current mode
    ///
    /// Registration stores the pair as "the registered credential"
    /// (silently overwriting any previous one), clears the fields, and
    /// reverts to sign-in mode. Sign-in compares against the stored
    /// pair and invokes the completion callback on an exact match.
    pub fn submit(&mut self, api: &dyn AuthApi) {
        self.error = None;
        self.message = None;

        if !self.validate() {
            return;
        }

        match self.mode {
            FormMode::Registering => {
                // Fire the network registration for its side effect; the
                // local slot is the source of truth for the next sign-in.
                let name = self.email.split('@').next().unwrap_or("").to_string();
                if let Err(e) = api.register(&name, &self.email, &self.password) {
                    tracing::warn!("register call failed (ignored by form): {}", e);
                }

                self.registered = Some(RegisteredCredential {
                    email: std::mem::take(&mut self.email),
                    password: std::mem::take(&mut self.password),
                });
                self.set_message(MSG_REGISTERED);
                self.mode = FormMode::SigningIn;
            }
            FormMode::SigningIn => {
                let matches = self
                    .registered
                    .as_ref()
                    .is_some_and(|r| r.email == self.email && r.password == self.password);

                if matches {
                    if let Err(e) = api.login(&self.email, &self.password) {
                        tracing::warn!("login call failed (ignored by form): {}", e);
                    }
                    self.set_message(MSG_LOGIN_SUCCESS);
                    if let Some(callback) = self.on_login.as_mut() {
                        callback();
                    }
                } else {
                    self.set_error(MSG_BAD_CREDENTIALS);
                }
            }
        }
    }

    /// Simulated forgot-password flow
    pub fn forgot_password(&mut self) {
        match &self.registered {
            None => self.set_error(MSG_NO_REGISTRATION),
            Some(r) if r.email == self.email => {
                self.set_message(MSG_RESET_SENT);
                self.error = None;
            }
            Some(_) => self.set_error(MSG_NOT_REGISTERED_EMAIL),
        }
    }
}
