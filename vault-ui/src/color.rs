use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const TRANSPARENT_GREEN: Color = Color::from_rgba(
    0x00 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0x66 as f32 / 255.0,
    0.3,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

// Modal backdrop, drawn over the base view.
pub const BACKDROP: Color = Color {
    a: 0.80,
    ..Color::BLACK
};
