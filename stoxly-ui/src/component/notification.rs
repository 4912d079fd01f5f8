use crate::{component::text, theme, widget::*};
use iced::{Alignment, Length};

pub fn warning<'a, T: 'a>(message: String, error: String) -> Container<'a, T> {
    Container::new(
        Row::new()
            .spacing(20)
            .align_y(Alignment::Center)
            .push(text::body_bold(message))
            .push(text::label(error)),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}

pub fn success<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(
        Row::new()
            .spacing(20)
            .align_y(Alignment::Center)
            .push(text::body_bold(message)),
    )
    .padding(15)
    .style(theme::notification::success)
    .width(Length::Fill)
}
