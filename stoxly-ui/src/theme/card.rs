use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 12.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 12.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

pub fn modal(theme: &Theme) -> Style {
    card(&theme.colors.cards.modal)
}

pub fn stock_ok(theme: &Theme) -> Style {
    card(&theme.colors.cards.stock_ok)
}

pub fn stock_low(theme: &Theme) -> Style {
    card(&theme.colors.cards.stock_low)
}
