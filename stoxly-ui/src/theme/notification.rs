use iced::widget::container::Style;
use iced::{Background, Border};

use super::{palette::ContainerPalette, Theme};

pub fn success(theme: &Theme) -> Style {
    banner(&theme.colors.notifications.success)
}

pub fn error(theme: &Theme) -> Style {
    banner(&theme.colors.notifications.error)
}

fn banner(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: palette
            .border
            .map(|color| Border {
                width: 1.0,
                color,
                radius: 12.0.into(),
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}
