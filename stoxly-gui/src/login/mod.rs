//! Login screen. There is no authentication backend, the credentials are
//! only checked locally before opening the dashboard.

use iced::{Alignment, Length, Task};

use stoxly_ui::{
    color,
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use crate::validation;

const USERNAME_INVALID: &str = "Please enter a valid username";
const PASSWORD_REQUIRED: &str = "Please enter your password";

#[derive(Debug, Clone)]
pub enum Message {
    UsernameEdited(String),
    PasswordEdited(String),
    SignIn,
    CloseNotification,
    // Handled by the upper level wrapping the LoginPanel state.
    GoToRegister,
    SignedIn,
}

pub struct LoginPanel {
    username: form::Value<String>,
    password: form::Value<String>,
    username_error: Option<&'static str>,
    password_error: Option<&'static str>,
    notification: Option<&'static str>,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            username: form::Value::default(),
            password: form::Value::default(),
            username_error: None,
            password_error: None,
            notification: None,
        }
    }

    /// A login screen displaying a notification, shown after a successful
    /// OTP verification.
    pub fn with_notification(notification: &'static str) -> Self {
        Self {
            notification: Some(notification),
            ..Self::new()
        }
    }

    pub fn username(&self) -> &str {
        &self.username.value
    }

    pub fn notification(&self) -> Option<&'static str> {
        self.notification
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UsernameEdited(value) => {
                self.username.value = value;
                self.username.valid = true;
                self.username_error = None;
            }
            Message::PasswordEdited(value) => {
                self.password.value = value;
                self.password.valid = true;
                self.password_error = None;
            }
            Message::SignIn => {
                if !validation::is_valid_username(&self.username.value) {
                    self.username.valid = false;
                    self.username_error = Some(USERNAME_INVALID);
                    return Task::none();
                }
                if !validation::is_non_empty(&self.password.value) {
                    self.password.valid = false;
                    self.password_error = Some(PASSWORD_REQUIRED);
                    return Task::none();
                }
                return Task::perform(async {}, |_| Message::SignedIn);
            }
            Message::CloseNotification => {
                self.notification = None;
            }
            // Handled by the upper level.
            Message::GoToRegister | Message::SignedIn => {}
        }
        Task::none()
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
                        .push(label("Don't have an account?").color(color::WHITE))
                        .push(iced::widget::Space::with_width(Length::Fill))
                        .push(button::secondary("Get Started").on_press(Message::GoToRegister)),
                )
                .push(title("Stoxly").color(color::WHITE))
                .push(body("Inventory Management Made Simple").color(color::WHITE)),
        )
        .padding(24)
        .width(Length::Fill)
        .style(theme::container::custom(color::GREEN_DARK));

        let card = Container::new(
            Column::new()
                .spacing(16)
                .align_x(Alignment::Center)
                .max_width(500)
                .push(heading("Welcome Back"))
                .push(body("Enter your details below").style(theme::text::secondary))
                .push(
                    form::Form::new_trimmed("Username", &self.username, Message::UsernameEdited)
                        .maybe_warning(self.username_error)
                        .size(BODY_SIZE)
                        .padding(10),
                )
                .push(
                    form::Form::new("Password", &self.password, Message::PasswordEdited)
                        .secure()
                        .maybe_warning(self.password_error)
                        .size(BODY_SIZE)
                        .padding(10),
                )
                .push(
                    button::primary("Sign In")
                        .width(Length::Fill)
                        .on_press(Message::SignIn),
                ),
        )
        .padding(28)
        .center_x(Length::Fill);

        let mut content = Column::new().push(header);
        if let Some(message) = self.notification {
            content = content.push(
                Button::new(notification::success(message.to_string()))
                    .style(theme::button::transparent)
                    .on_press(Message::CloseNotification)
                    .width(Length::Fill),
            );
        }
        content.push(card).into()
    }
}

impl Default for LoginPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_valid_credentials() {
        let mut panel = LoginPanel::new();
        let _task = panel.update(Message::SignIn);
        assert_eq!(panel.username_error, Some(USERNAME_INVALID));

        let _task = panel.update(Message::UsernameEdited("al".to_string()));
        assert_eq!(panel.username_error, None);
        let _task = panel.update(Message::SignIn);
        assert_eq!(panel.username_error, Some(USERNAME_INVALID));

        let _task = panel.update(Message::UsernameEdited("alice".to_string()));
        let _task = panel.update(Message::SignIn);
        assert_eq!(panel.username_error, None);
        assert_eq!(panel.password_error, Some(PASSWORD_REQUIRED));

        let _task = panel.update(Message::PasswordEdited("hunter2".to_string()));
        let _task = panel.update(Message::SignIn);
        assert_eq!(panel.password_error, None);
    }

    #[test]
    fn notification_can_be_dismissed() {
        let mut panel = LoginPanel::with_notification("OTP verified successfully!");
        assert!(panel.notification().is_some());
        let _task = panel.update(Message::CloseNotification);
        assert!(panel.notification().is_none());
    }
}
