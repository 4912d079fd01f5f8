use std::sync::Arc;

use iced::{Subscription, Task};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use stoxly_ui::widget::Element;

use crate::{
    app::{self, App},
    config::Config,
    dir::StoxlyDirectory,
    login::{self, LoginPanel},
    logger::setup_logger,
    onboarding::{self, OnboardingPanel},
    register::{self, RegisterPanel, OTP_VERIFIED_NOTIFICATION},
    services::api::client::InventoryClient,
    VERSION,
};

pub struct GUI {
    screen: Screen,
    config: Config,
}

enum Screen {
    Onboarding(OnboardingPanel),
    Register(RegisterPanel),
    Login(LoginPanel),
    Dashboard(App),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    Onboarding(onboarding::Message),
    Register(register::Message),
    Login(login::Message),
    Dashboard(app::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Stoxly v{}", VERSION)
    }

    pub fn new(
        (datadir, config, log_level): (StoxlyDirectory, Config, Option<LevelFilter>),
    ) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, datadir) {
            tracing::warn!("Error while setting up the logger: {}", e);
        }
        info!("Starting Stoxly v{}", VERSION);
        (
            Self {
                screen: Screen::Onboarding(OnboardingPanel::new()),
                config,
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.screen, message) {
            (_, Message::CtrlC) => iced::exit(),
            (Screen::Onboarding(panel), Message::Onboarding(message)) => {
                if let onboarding::Message::Completed(profession) = message {
                    info!("Onboarding completed as {}", profession.id());
                    self.screen = Screen::Register(RegisterPanel::new());
                    Task::none()
                } else {
                    panel.update(message).map(Message::Onboarding)
                }
            }
            (Screen::Register(panel), Message::Register(message)) => match message {
                register::Message::Verified => {
                    self.screen =
                        Screen::Login(LoginPanel::with_notification(OTP_VERIFIED_NOTIFICATION));
                    Task::none()
                }
                register::Message::View(register::ViewMessage::GoToLogin) => {
                    self.screen = Screen::Login(LoginPanel::new());
                    Task::none()
                }
                message => panel.update(message).map(Message::Register),
            },
            (Screen::Login(panel), Message::Login(message)) => match message {
                login::Message::GoToRegister => {
                    self.screen = Screen::Register(RegisterPanel::new());
                    Task::none()
                }
                login::Message::SignedIn => {
                    info!("Signed in, opening the dashboard");
                    let api = Arc::new(InventoryClient::new(self.config.api_base_url.clone()));
                    let (dashboard, task) = App::new(api);
                    self.screen = Screen::Dashboard(dashboard);
                    task.map(Message::Dashboard)
                }
                message => panel.update(message).map(Message::Login),
            },
            (Screen::Dashboard(dashboard), Message::Dashboard(message)) => {
                dashboard.update(message).map(Message::Dashboard)
            }
            _ => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Onboarding(panel) => panel.subscription().map(Message::Onboarding),
            Screen::Register(panel) => panel.subscription().map(Message::Register),
            Screen::Login(_) | Screen::Dashboard(_) => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Onboarding(panel) => panel.view().map(Message::Onboarding),
            Screen::Register(panel) => panel.view().map(Message::Register),
            Screen::Login(panel) => panel.view().map(Message::Login),
            Screen::Dashboard(dashboard) => dashboard.view().map(Message::Dashboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::Profession;

    fn gui() -> GUI {
        GUI {
            screen: Screen::Onboarding(OnboardingPanel::new()),
            config: Config::default(),
        }
    }

    #[test]
    fn onboarding_to_register_to_login() {
        let mut gui = gui();

        let _task = gui.update(Message::Onboarding(onboarding::Message::Completed(
            Profession::FieldPartner,
        )));
        assert!(matches!(gui.screen, Screen::Register(_)));

        let _task = gui.update(Message::Register(register::Message::Verified));
        match &gui.screen {
            Screen::Login(panel) => {
                assert_eq!(panel.notification(), Some(OTP_VERIFIED_NOTIFICATION))
            }
            _ => panic!("expected the login screen"),
        }
    }

    #[test]
    fn login_and_register_link_to_each_other() {
        let mut gui = gui();
        gui.screen = Screen::Register(RegisterPanel::new());

        let _task = gui.update(Message::Register(register::Message::View(
            register::ViewMessage::GoToLogin,
        )));
        match &gui.screen {
            Screen::Login(panel) => assert!(panel.notification().is_none()),
            _ => panic!("expected the login screen"),
        }

        let _task = gui.update(Message::Login(login::Message::GoToRegister));
        assert!(matches!(gui.screen, Screen::Register(_)));
    }

    #[test]
    fn sign_in_opens_the_dashboard() {
        let mut gui = gui();
        gui.screen = Screen::Login(LoginPanel::new());

        let _task = gui.update(Message::Login(login::Message::SignedIn));
        assert!(matches!(gui.screen, Screen::Dashboard(_)));
    }
}
