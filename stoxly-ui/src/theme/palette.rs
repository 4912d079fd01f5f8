use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub pills: Pills,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    /// Default color of all text, set application-wide.
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
    pub warning: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub menu: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    /// Stock rows with enough inventory.
    pub stock_ok: ContainerPalette,
    /// Stock rows under the low-stock threshold.
    pub stock_low: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub simple: ContainerPalette,
    pub primary: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::WHITE,
                foreground: color::OFF_WHITE,
                scrollable: color::GREEN_DARK,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_3,
                accent: color::GREEN_DARK,
                warning: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN_DARK,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREEN,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREEN_DARKER,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_3,
                        border: Some(color::GREY_1),
                    },
                    hovered: ButtonPalette {
                        background: color::OFF_WHITE,
                        text: color::LIGHT_BLACK,
                        border: Some(color::GREY_1),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_2,
                        border: Some(color::GREY_1),
                    }),
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::RED,
                        border: Some(color::RED),
                    },
                    hovered: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN_DARK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    }),
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREEN_DARK,
                        border: Some(color::GREEN_DARK),
                    },
                    hovered: ButtonPalette {
                        background: color::OFF_WHITE,
                        text: color::GREEN_DARK,
                        border: Some(color::GREEN_DARK),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREEN_DARK,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_1),
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_1),
                },
                stock_ok: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: Some(color::LIGHT_BLACK),
                    border: None,
                },
                stock_low: ContainerPalette {
                    background: color::LIGHT_RED,
                    text: Some(color::LIGHT_BLACK),
                    border: None,
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::GREEN_DARK),
                    border: Some(color::GREEN_DARK),
                },
                primary: ContainerPalette {
                    background: color::GREEN_DARK,
                    text: Some(color::WHITE),
                    border: None,
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: Some(color::LIGHT_BLACK),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::LIGHT_RED,
                    text: Some(color::LIGHT_BLACK),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::OFF_WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::LIGHT_BLACK,
                        selection: color::GREEN,
                        border: Some(color::GREY_1),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::GREY_3,
                        selection: color::GREEN,
                        border: Some(color::GREY_1),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::OFF_WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::LIGHT_BLACK,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::GREY_3,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
