//! Registration screen: the details form and the OTP verification modal.

use std::time::Duration;

use iced::{time, Alignment, Length, Subscription, Task};

use stoxly_ui::{
    color,
    component::{button, card, form, notification, text::*},
    theme,
    widget::{modal::Modal, *},
};

use crate::validation;

/// Number of digits of a one-time password.
pub const OTP_LEN: usize = 6;
/// Seconds to wait before a new OTP can be requested.
pub const OTP_RESEND_COOLDOWN_SECS: u8 = 30;

pub const OTP_SENT_NOTIFICATION: &str = "A new OTP has been sent to your email";
pub const OTP_VERIFIED_NOTIFICATION: &str = "OTP verified successfully!";

const NAME_REQUIRED: &str = "Please enter your name";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const PASSWORD_INVALID: &str = "Please enter a valid password";
const PASSWORDS_MISMATCH: &str = "Passwords do not match";
const OTP_REQUIRED: &str = "Please enter the OTP";
const OTP_NOT_SIX_DIGITS: &str = "OTP must be 6 digits";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    RePassword,
    Otp,
}

/// At most one error message per form field.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    password: Option<&'static str>,
    re_password: Option<&'static str>,
    otp: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::RePassword => self.re_password,
            Field::Otp => self.otp,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::RePassword => &mut self.re_password,
            Field::Otp => &mut self.otp,
        }
    }

    pub fn set(&mut self, field: Field, message: &'static str) {
        *self.slot(field) = Some(message);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.re_password.is_none()
            && self.otp.is_none()
    }
}

/// State of the OTP verification modal while it is open.
#[derive(Debug, Clone)]
pub struct OtpSession {
    pub code: form::Value<String>,
    pub seconds_remaining: u8,
    pub can_resend: bool,
}

impl OtpSession {
    fn start() -> Self {
        Self {
            code: form::Value::default(),
            seconds_remaining: OTP_RESEND_COOLDOWN_SECS,
            can_resend: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Tick,
    // Handled by the upper level wrapping the RegisterPanel state: redirect
    // to the login screen with a success notification.
    Verified,
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    NameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    RePasswordEdited(String),
    Next,
    OtpEdited(String),
    VerifyOtp,
    CancelOtp,
    ResendOtp,
    CloseNotification,
    // Handled by the upper level: switch to the login screen.
    GoToLogin,
}

pub struct RegisterPanel {
    name: form::Value<String>,
    email: form::Value<String>,
    password: form::Value<String>,
    re_password: form::Value<String>,
    errors: FieldErrors,
    otp: Option<OtpSession>,
    notification: Option<&'static str>,
}

impl RegisterPanel {
    pub fn new() -> Self {
        Self {
            name: form::Value::default(),
            email: form::Value::default(),
            password: form::Value::default(),
            re_password: form::Value::default(),
            errors: FieldErrors::default(),
            otp: None,
            notification: None,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn otp_session(&self) -> Option<&OtpSession> {
        self.otp.as_ref()
    }

    pub fn notification(&self) -> Option<&'static str> {
        self.notification
    }

    pub fn form_values(&self) -> (&str, &str, &str, &str) {
        (
            &self.name.value,
            &self.email.value,
            &self.password.value,
            &self.re_password.value,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if let Some(session) = &mut self.otp {
                    if session.seconds_remaining > 0 {
                        session.seconds_remaining -= 1;
                        if session.seconds_remaining == 0 {
                            session.can_resend = true;
                        }
                    }
                }
            }
            Message::View(ViewMessage::NameEdited(value)) => {
                self.name.value = value;
                self.name.valid = true;
                self.errors.clear(Field::Name);
            }
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.value = value;
                self.email.valid = true;
                self.errors.clear(Field::Email);
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.value = value;
                self.password.valid = true;
                self.errors.clear(Field::Password);
                // A mismatch error is about the pair of fields, editing
                // either of them invalidates it.
                self.re_password.valid = true;
                self.errors.clear(Field::RePassword);
            }
            Message::View(ViewMessage::RePasswordEdited(value)) => {
                self.re_password.value = value;
                self.re_password.valid = true;
                self.errors.clear(Field::RePassword);
            }
            Message::View(ViewMessage::Next) => self.handle_next(),
            Message::View(ViewMessage::OtpEdited(value)) => {
                if let Some(session) = &mut self.otp {
                    if value.chars().count() <= OTP_LEN {
                        session.code.value = value;
                    }
                    session.code.valid = true;
                    self.errors.clear(Field::Otp);
                }
            }
            Message::View(ViewMessage::VerifyOtp) => return self.verify_otp(),
            Message::View(ViewMessage::CancelOtp) => {
                // Idempotent, and the form fields behind the modal are kept.
                self.otp = None;
            }
            Message::View(ViewMessage::ResendOtp) => {
                if let Some(session) = &mut self.otp {
                    if session.can_resend {
                        *session = OtpSession::start();
                        self.notification = Some(OTP_SENT_NOTIFICATION);
                    }
                }
            }
            Message::View(ViewMessage::CloseNotification) => {
                self.notification = None;
            }
            // Handled by the upper level.
            Message::View(ViewMessage::GoToLogin) | Message::Verified => {}
        }
        Task::none()
    }

    /// Validate the details form, first failing field wins. On success open
    /// the OTP modal and start the resend countdown.
    fn handle_next(&mut self) {
        if !validation::is_non_empty(&self.name.value) {
            self.errors.set(Field::Name, NAME_REQUIRED);
            self.name.valid = false;
            return;
        }
        if !validation::is_valid_email(&self.email.value) {
            self.errors.set(Field::Email, EMAIL_INVALID);
            self.email.valid = false;
            return;
        }
        if !validation::is_valid_password(&self.password.value) {
            self.errors.set(Field::Password, PASSWORD_INVALID);
            self.password.valid = false;
            return;
        }
        if self.password.value != self.re_password.value {
            self.errors.set(Field::RePassword, PASSWORDS_MISMATCH);
            self.re_password.valid = false;
            return;
        }
        self.otp = Some(OtpSession::start());
    }

    fn verify_otp(&mut self) -> Task<Message> {
        let Some(session) = &mut self.otp else {
            return Task::none();
        };
        if session.code.value.trim().is_empty() {
            self.errors.set(Field::Otp, OTP_REQUIRED);
            session.code.valid = false;
            return Task::none();
        }
        if !validation::is_valid_otp(&session.code.value) {
            self.errors.set(Field::Otp, OTP_NOT_SIX_DIGITS);
            session.code.valid = false;
            return Task::none();
        }
        self.otp = None;
        Task::perform(async {}, |_| Message::Verified)
    }

    /// Whether the resend cooldown is counting down. The countdown timer
    /// exists only while the modal is open and the cooldown has not elapsed.
    pub fn timer_running(&self) -> bool {
        self.otp
            .as_ref()
            .is_some_and(|session| session.seconds_remaining > 0)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.timer_running() {
            time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<Message> {
        let header = Container::new(
            Column::new()
                .spacing(10)
                .align_x(Alignment::Center)
                .push(
                    Row::new()
                        .width(Length::Fill)
                        .align_y(Alignment::Center)
                        .push(label("Already have an account?").color(color::WHITE))
                        .push(iced::widget::Space::with_width(Length::Fill))
                        .push(
                            button::secondary("Login")
                                .on_press(ViewMessage::GoToLogin),
                        ),
                )
                .push(title("Stoxly").color(color::WHITE))
                .push(body("Inventory Management Made Simple").color(color::WHITE)),
        )
        .padding(24)
        .width(Length::Fill)
        .style(theme::container::custom(color::GREEN_DARK));

        let details = Container::new(
            Column::new()
                .spacing(16)
                .align_x(Alignment::Center)
                .max_width(500)
                .push(heading("Get Started"))
                .push(body("Enter your details below").style(theme::text::secondary))
                .push(
                    form::Form::new("Name", &self.name, |value| {
                        ViewMessage::NameEdited(value)
                    })
                    .maybe_warning(self.errors.get(Field::Name))
                    .size(BODY_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new_trimmed("Email", &self.email, |value| {
                        ViewMessage::EmailEdited(value)
                    })
                    .maybe_warning(self.errors.get(Field::Email))
                    .size(BODY_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new("Password", &self.password, |value| {
                        ViewMessage::PasswordEdited(value)
                    })
                    .secure()
                    .maybe_warning(self.errors.get(Field::Password))
                    .size(BODY_SIZE)
                    .padding(10),
                )
                .push(
                    form::Form::new("Re-Enter Password", &self.re_password, |value| {
                        ViewMessage::RePasswordEdited(value)
                    })
                    .secure()
                    .maybe_warning(self.errors.get(Field::RePassword))
                    .size(BODY_SIZE)
                    .padding(10),
                )
                .push(
                    button::primary("Next")
                        .width(Length::Fill)
                        .on_press(ViewMessage::Next),
                ),
        )
        .padding(28)
        .center_x(Length::Fill);

        let mut content = Column::new().push(header);
        if let Some(message) = self.notification {
            content = content.push(
                Button::new(notification::success(message.to_string()))
                    .style(theme::button::transparent)
                    .on_press(ViewMessage::CloseNotification)
                    .width(Length::Fill),
            );
        }
        let content = content.push(details);

        if let Some(session) = &self.otp {
            Into::<Element<ViewMessage>>::into(Modal::new(content, self.otp_modal(session)).on_blur(
                Some(ViewMessage::CancelOtp),
            ))
            .map(Message::View)
        } else {
            Into::<Element<ViewMessage>>::into(content).map(Message::View)
        }
    }

    fn otp_modal<'a>(&'a self, session: &'a OtpSession) -> Element<'a, ViewMessage> {
        card::modal(
            Column::new()
                .spacing(16)
                .align_x(Alignment::Center)
                .max_width(400)
                .push(subheading("Email Verification"))
                .push(
                    Column::new()
                        .align_x(Alignment::Center)
                        .push(label("We've sent a 6-digit OTP to").style(theme::text::secondary))
                        .push(label_medium(&self.email.value).style(theme::text::accent)),
                )
                .push(
                    form::Form::new_digits("Enter 6-digit OTP", &session.code, |value| {
                        ViewMessage::OtpEdited(value)
                    })
                    .maybe_warning(self.errors.get(Field::Otp))
                    .size(BODY_SIZE)
                    .padding(10),
                )
                .push(
                    button::primary("Verify")
                        .width(Length::Fill)
                        .on_press(ViewMessage::VerifyOtp),
                )
                .push(
                    button::secondary("Cancel")
                        .width(Length::Fill)
                        .on_press(ViewMessage::CancelOtp),
                )
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(Alignment::Center)
                        .push(label("Didn't receive OTP?").style(theme::text::secondary))
                        .push(if session.can_resend {
                            Element::from(
                                button::link("Resend").on_press(ViewMessage::ResendOtp),
                            )
                        } else {
                            label(format!("Resend in {}s", session.seconds_remaining))
                                .style(theme::text::secondary)
                                .into()
                        }),
                ),
        )
        .into()
    }
}

impl Default for RegisterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::utils::sandbox::Updateable for RegisterPanel {
    type Message = Message;
    fn update(&mut self, message: Message) -> Task<Message> {
        self.update(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sandbox::Sandbox;

    fn filled_panel() -> RegisterPanel {
        let mut panel = RegisterPanel::new();
        for message in [
            ViewMessage::NameEdited("Alice".to_string()),
            ViewMessage::EmailEdited("alice@example.com".to_string()),
            ViewMessage::PasswordEdited("Str0ng&Pass".to_string()),
            ViewMessage::RePasswordEdited("Str0ng&Pass".to_string()),
        ] {
            let _task = panel.update(Message::View(message));
        }
        panel
    }

    fn open_modal(panel: &mut RegisterPanel) {
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert!(panel.otp_session().is_some());
    }

    #[test]
    fn next_validates_fields_in_order() {
        let mut panel = RegisterPanel::new();

        // Empty form, the name check fails first and nothing else is flagged.
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(panel.errors().get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(panel.errors().get(Field::Email), None);
        assert!(panel.otp_session().is_none());

        let _task = panel.update(Message::View(ViewMessage::NameEdited("Alice".to_string())));
        assert!(panel.errors().is_empty());
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(panel.errors().get(Field::Email), Some(EMAIL_INVALID));

        let _task = panel.update(Message::View(ViewMessage::EmailEdited(
            "alice@example.com".to_string(),
        )));
        let _task = panel.update(Message::View(ViewMessage::PasswordEdited(
            "weak".to_string(),
        )));
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(panel.errors().get(Field::Password), Some(PASSWORD_INVALID));

        let _task = panel.update(Message::View(ViewMessage::PasswordEdited(
            "Str0ng&Pass".to_string(),
        )));
        let _task = panel.update(Message::View(ViewMessage::RePasswordEdited(
            "Str0ng&Pas".to_string(),
        )));
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(
            panel.errors().get(Field::RePassword),
            Some(PASSWORDS_MISMATCH)
        );
        assert!(panel.otp_session().is_none());
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut panel = RegisterPanel::new();
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(panel.errors().get(Field::Name), Some(NAME_REQUIRED));

        let _task = panel.update(Message::View(ViewMessage::NameEdited("A".to_string())));
        assert_eq!(panel.errors().get(Field::Name), None);
    }

    #[test]
    fn editing_password_clears_mismatch_error() {
        let mut panel = filled_panel();
        let _task = panel.update(Message::View(ViewMessage::RePasswordEdited(
            "Different1&".to_string(),
        )));
        let _task = panel.update(Message::View(ViewMessage::Next));
        assert_eq!(
            panel.errors().get(Field::RePassword),
            Some(PASSWORDS_MISMATCH)
        );

        let _task = panel.update(Message::View(ViewMessage::PasswordEdited(
            "Different1&".to_string(),
        )));
        assert!(panel.errors().is_empty());
    }

    #[test]
    fn modal_opens_with_fresh_session() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        let session = panel.otp_session().unwrap();
        assert_eq!(session.code.value, "");
        assert_eq!(session.seconds_remaining, OTP_RESEND_COOLDOWN_SECS);
        assert!(!session.can_resend);
    }

    #[test]
    fn countdown_stops_at_zero_and_enables_resend() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        for expected in (0..OTP_RESEND_COOLDOWN_SECS).rev() {
            let _task = panel.update(Message::Tick);
            let session = panel.otp_session().unwrap();
            assert_eq!(session.seconds_remaining, expected);
            assert_eq!(session.can_resend, expected == 0);
        }

        // Extra ticks must not wrap below zero.
        for _ in 0..5 {
            let _task = panel.update(Message::Tick);
        }
        let session = panel.otp_session().unwrap();
        assert_eq!(session.seconds_remaining, 0);
        assert!(session.can_resend);
    }

    #[test]
    fn timer_subscription_tracks_session() {
        let mut panel = filled_panel();
        assert!(!panel.timer_running());

        open_modal(&mut panel);
        assert!(panel.timer_running());

        for _ in 0..OTP_RESEND_COOLDOWN_SECS {
            let _task = panel.update(Message::Tick);
        }
        // Cooldown elapsed, the modal is still open but nothing ticks.
        assert!(panel.otp_session().is_some());
        assert!(!panel.timer_running());

        let _task = panel.update(Message::View(ViewMessage::CancelOtp));
        assert!(!panel.timer_running());
    }

    #[test]
    fn verify_rejects_empty_and_short_codes() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        let _task = panel.update(Message::View(ViewMessage::VerifyOtp));
        assert_eq!(panel.errors().get(Field::Otp), Some(OTP_REQUIRED));
        assert!(panel.otp_session().is_some());

        let _task = panel.update(Message::View(ViewMessage::OtpEdited("123".to_string())));
        assert_eq!(panel.errors().get(Field::Otp), None);
        let _task = panel.update(Message::View(ViewMessage::VerifyOtp));
        assert_eq!(panel.errors().get(Field::Otp), Some(OTP_NOT_SIX_DIGITS));
        assert!(panel.otp_session().is_some());
    }

    #[tokio::test]
    async fn verify_valid_code_navigates_once() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        let mut sandbox = Sandbox::new(panel);
        sandbox
            .update(Message::View(ViewMessage::OtpEdited("123456".to_string())))
            .await;
        sandbox.update(Message::View(ViewMessage::VerifyOtp)).await;

        assert!(sandbox.state().otp_session().is_none());
        assert_eq!(
            sandbox
                .seen
                .iter()
                .filter(|message| matches!(message, Message::Verified))
                .count(),
            1
        );
    }

    #[test]
    fn otp_input_is_capped_at_six_digits() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        let _task = panel.update(Message::View(ViewMessage::OtpEdited("123456".to_string())));
        assert_eq!(panel.otp_session().unwrap().code.value, "123456");
        let _task = panel.update(Message::View(ViewMessage::OtpEdited("1234567".to_string())));
        assert_eq!(panel.otp_session().unwrap().code.value, "123456");
    }

    #[test]
    fn cancel_closes_and_keeps_form_fields() {
        let mut panel = filled_panel();
        open_modal(&mut panel);
        let _task = panel.update(Message::View(ViewMessage::OtpEdited("12".to_string())));

        let _task = panel.update(Message::View(ViewMessage::CancelOtp));
        assert!(panel.otp_session().is_none());
        let (name, email, password, re_password) = panel.form_values();
        assert_eq!(name, "Alice");
        assert_eq!(email, "alice@example.com");
        assert_eq!(password, "Str0ng&Pass");
        assert_eq!(re_password, "Str0ng&Pass");

        // Cancelling again is a no-op.
        let _task = panel.update(Message::View(ViewMessage::CancelOtp));
        assert!(panel.otp_session().is_none());
    }

    #[test]
    fn resend_only_after_cooldown() {
        let mut panel = filled_panel();
        open_modal(&mut panel);

        // Too early: nothing happens, no notification.
        let _task = panel.update(Message::View(ViewMessage::OtpEdited("42".to_string())));
        let _task = panel.update(Message::View(ViewMessage::ResendOtp));
        let session = panel.otp_session().unwrap();
        assert_eq!(session.code.value, "42");
        assert_eq!(session.seconds_remaining, OTP_RESEND_COOLDOWN_SECS);
        assert!(panel.notification().is_none());

        for _ in 0..OTP_RESEND_COOLDOWN_SECS {
            let _task = panel.update(Message::Tick);
        }
        let _task = panel.update(Message::View(ViewMessage::ResendOtp));
        let session = panel.otp_session().unwrap();
        assert_eq!(session.code.value, "");
        assert_eq!(session.seconds_remaining, OTP_RESEND_COOLDOWN_SECS);
        assert!(!session.can_resend);
        assert_eq!(panel.notification(), Some(OTP_SENT_NOTIFICATION));
    }
}
