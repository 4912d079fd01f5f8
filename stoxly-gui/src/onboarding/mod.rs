//! First-launch onboarding: the entry carousel followed by the profession
//! selection.

use std::time::Duration;

use iced::{time, Alignment, Length, Subscription, Task};

use stoxly_ui::{
    color,
    component::{button, card, text::*},
    theme,
    widget::*,
};

/// Seconds between two automatic carousel advances.
const CAROUSEL_INTERVAL_SECS: u64 = 4;

const SLIDES: [&str; 3] = [
    "Track your stock at a glance",
    "Get alerted before you run out",
    "Manage your inventory from anywhere",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profession {
    FieldPartner,
    WholesalerDistributor,
}

impl Profession {
    pub const ALL: [Profession; 2] = [
        Profession::FieldPartner,
        Profession::WholesalerDistributor,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Profession::FieldPartner => "field_partner",
            Profession::WholesalerDistributor => "wholesaler_distributor",
        }
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Profession::FieldPartner => write!(f, "Field Partner"),
            Profession::WholesalerDistributor => write!(f, "Wholesaler/Distributor"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NextSlide,
    SlideSelected(usize),
    GetStarted,
    ProfessionSelected(Profession),
    // Handled by the upper level: move on to the registration screen.
    Completed(Profession),
}

enum Step {
    Carousel { current: usize },
    Profession { selected: Option<Profession> },
}

pub struct OnboardingPanel {
    step: Step,
}

impl OnboardingPanel {
    pub fn new() -> Self {
        Self {
            step: Step::Carousel { current: 0 },
        }
    }

    pub fn current_slide(&self) -> Option<usize> {
        match &self.step {
            Step::Carousel { current } => Some(*current),
            Step::Profession { .. } => None,
        }
    }

    pub fn selected_profession(&self) -> Option<Profession> {
        match &self.step {
            Step::Carousel { .. } => None,
            Step::Profession { selected } => *selected,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.step, message) {
            (Step::Carousel { current }, Message::NextSlide) => {
                *current = (*current + 1) % SLIDES.len();
            }
            (Step::Carousel { current }, Message::SlideSelected(index)) => {
                if index < SLIDES.len() {
                    *current = index;
                }
            }
            (Step::Carousel { .. }, Message::GetStarted) => {
                self.step = Step::Profession { selected: None };
            }
            (Step::Profession { selected }, Message::ProfessionSelected(profession)) => {
                *selected = Some(profession);
            }
            (Step::Profession { selected }, Message::GetStarted) => {
                if let Some(profession) = *selected {
                    return Task::perform(async move { profession }, Message::Completed);
                }
            }
            _ => {}
        }
        Task::none()
    }

    /// The carousel advances on its own until the user moves on.
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.step {
            Step::Carousel { .. } => time::every(Duration::from_secs(CAROUSEL_INTERVAL_SECS))
                .map(|_| Message::NextSlide),
            Step::Profession { .. } => Subscription::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.step {
            Step::Carousel { current } => self.view_carousel(*current),
            Step::Profession { selected } => self.view_profession(*selected),
        }
    }

    fn view_carousel(&self, current: usize) -> Element<Message> {
        let mut indicators = Row::new().spacing(8).align_y(Alignment::Center);
        for (index, _) in SLIDES.iter().enumerate() {
            indicators = indicators.push(
                Button::new(
                    Container::new(iced::widget::Space::new(
                        Length::Fixed(if index == current { 24.0 } else { 8.0 }),
                        Length::Fixed(8.0),
                    ))
                    .style(if index == current {
                        theme::pill::primary
                    } else {
                        theme::pill::simple
                    }),
                )
                .style(theme::button::transparent)
                .padding(0)
                .on_press(Message::SlideSelected(index)),
            );
        }

        Container::new(
            Column::new()
                .spacing(24)
                .align_x(Alignment::Center)
                .max_width(500)
                .push(card::simple(
                    Container::new(subheading_regular(SLIDES[current]))
                        .padding(40)
                        .center_x(Length::Fill),
                ))
                .push(indicators)
                .push(title("Stoxly").color(color::GREEN_DARK))
                .push(body("Inventory Management Made Simple").style(theme::text::secondary))
                .push(
                    button::primary("Get Started")
                        .width(Length::Fill)
                        .on_press(Message::GetStarted),
                ),
        )
        .padding(24)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn view_profession(&self, selected: Option<Profession>) -> Element<Message> {
        let mut choices = Column::new().spacing(16);
        for profession in Profession::ALL {
            let chosen = selected == Some(profession);
            choices = choices.push(
                Button::new(
                    Container::new(body_medium(profession))
                        .padding(15)
                        .center_x(Length::Fill)
                        .style(if chosen {
                            theme::pill::primary
                        } else {
                            theme::pill::simple
                        }),
                )
                .style(theme::button::transparent)
                .width(Length::Fill)
                .on_press(Message::ProfessionSelected(profession)),
            );
        }

        Container::new(
            Column::new()
                .spacing(24)
                .align_x(Alignment::Center)
                .max_width(500)
                .push(heading("What describes you best?"))
                .push(body("Select your profession to continue").style(theme::text::secondary))
                .push(choices)
                .push(
                    button::primary("Next")
                        .width(Length::Fill)
                        .on_press_maybe(selected.map(|_| Message::GetStarted)),
                ),
        )
        .padding(24)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

impl Default for OnboardingPanel {
    fn default() -> Self {
        Self::new()
    }
}
