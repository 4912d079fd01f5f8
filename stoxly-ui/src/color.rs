use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x66 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xAA as f32 / 255.0,
    0xAA as f32 / 255.0,
    0xAA as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE9 as f32 / 255.0,
    0xEC as f32 / 255.0,
    0xEF as f32 / 255.0,
);
pub const OFF_WHITE: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xF9 as f32 / 255.0,
    0xFA as f32 / 255.0,
);

pub const GREEN_DARKER: Color = Color::from_rgb(
    0x2E as f32 / 255.0,
    0x7D as f32 / 255.0,
    0x32 as f32 / 255.0,
);
pub const GREEN_DARK: Color = Color::from_rgb(
    0x38 as f32 / 255.0,
    0x8E as f32 / 255.0,
    0x3C as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x4C as f32 / 255.0,
    0xAF as f32 / 255.0,
    0x50 as f32 / 255.0,
);
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xD7 as f32 / 255.0,
    0xF6 as f32 / 255.0,
    0xBF as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
