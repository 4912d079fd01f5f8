use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    input(&theme.colors.text_inputs.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    input(&theme.colors.text_inputs.invalid, status)
}

fn input(c: &palette::TextInput, status: Status) -> Style {
    // Focus and hover are not differentiated, only disabled inputs look
    // different.
    let fields = if matches!(status, Status::Disabled) {
        &c.disabled
    } else {
        &c.active
    };
    Style {
        background: Background::Color(fields.background),
        border: fields
            .border
            .map(|color| Border {
                radius: 12.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        icon: fields.icon,
        placeholder: fields.placeholder,
        value: fields.value,
        selection: fields.selection,
    }
}
