use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub backdrop: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub link: Button,
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
    pub modal: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub info: ContainerPalette,
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
                background: color::LIGHT_BLACK,
                backdrop: color::BACKDROP,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::LIGHT_BLACK,
                        border: color::GREEN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_GREEN,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT_GREEN,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREY_2,
                        border: color::GREY_7.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    }),
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                modal: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: None,
                    border: color::GREY_7.into(),
                },
            },
            notifications: Notifications {
                info: ContainerPalette {
                    background: color::GREY_5,
                    text: color::GREY_2.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::TRANSPARENT,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: Some(color::GREY_7),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::TRANSPARENT_GREEN,
                        border: Some(color::GREY_7),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::TRANSPARENT,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_GREEN,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_2,
                        selection: color::TRANSPARENT_GREEN,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
