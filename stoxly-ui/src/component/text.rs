//! Typography helpers. One family at three weights; the sizes follow the
//! mobile mockups rather than a modular scale.

use std::fmt::Display;

use iced::advanced::text::Shaping;
use iced::Font;

use crate::{font, widget::Text};

pub const TITLE_SIZE: u16 = 36;
pub const HEADING_SIZE: u16 = 24;
pub const SUBHEADING_SIZE: u16 = 19;
/// Running text, also the application-wide default.
pub const BODY_SIZE: u16 = 16;
pub const LABEL_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;

fn sized<'a>(content: impl Display, font: Font, size: u16) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size)
}

/// The brand wordmark on the entry screens.
pub fn title<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::BOLD, TITLE_SIZE)
}

pub fn heading<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::BOLD, HEADING_SIZE)
}

pub fn subheading<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::BOLD, SUBHEADING_SIZE)
}

pub fn subheading_regular<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::REGULAR, SUBHEADING_SIZE)
}

pub fn body<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::REGULAR, BODY_SIZE)
}

pub fn body_medium<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::MEDIUM, BODY_SIZE)
}

pub fn body_bold<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::BOLD, BODY_SIZE)
}

/// Secondary line under a list entry or next to a field.
pub fn label<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::REGULAR, LABEL_SIZE)
}

pub fn label_medium<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::MEDIUM, LABEL_SIZE)
}

pub fn caption<'a>(content: impl Display) -> Text<'a> {
    sized(content, font::REGULAR, CAPTION_SIZE)
}
