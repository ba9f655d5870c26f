use iced::{
    font::{Stretch, Weight},
    Font,
};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    stretch: Stretch::Normal,
    ..Font::DEFAULT
};

pub const MEDIUM: Font = Font {
    weight: Weight::Medium,
    stretch: Stretch::Normal,
    ..Font::DEFAULT
};

pub const REGULAR: Font = Font::DEFAULT;
