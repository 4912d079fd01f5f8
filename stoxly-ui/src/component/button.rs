use super::text::body;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::Vertical;
use iced::widget::{container, row};
use iced::Length;

pub fn menu<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content_menu(t).padding(5)).style(theme::button::menu)
}

pub fn menu_active<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content_menu(t).padding(5)).style(theme::button::menu_pressed)
}

fn content_menu<'a, T: 'a>(t: &'static str) -> Container<'a, T> {
    container(row![body(t)].align_y(Vertical::Center)).padding(5)
}

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        body(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        body(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

pub fn alert<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        body(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::destructive)
}

pub fn link<'a, T: 'a>(t: impl Into<String>) -> Button<'a, T> {
    Button::new(body(t.into()).align_y(iced::Alignment::Center))
        .style(theme::button::transparent)
        .padding(0)
}

fn content<'a, T: 'a>(content: Text<'a>) -> Container<'a, T> {
    container(content.width(Length::Fill))
        .width(Length::Fill)
        .padding(5)
        .center_x(Length::Fill)
}
