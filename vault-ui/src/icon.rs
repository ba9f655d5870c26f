use crate::widget::Svg;
use iced::{widget::svg::Handle, Length};

pub const ICON_SIZE: f32 = 20.0;

const LOCK_ICON: &[u8] = include_bytes!("../static/icons/lock.svg");
const LOCK_OPEN_ICON: &[u8] = include_bytes!("../static/icons/lock-open.svg");
const CROSS_ICON: &[u8] = include_bytes!("../static/icons/x.svg");
const INFO_ICON: &[u8] = include_bytes!("../static/icons/info-circle.svg");
const EYE_ICON: &[u8] = include_bytes!("../static/icons/eye.svg");
const EYE_SLASH_ICON: &[u8] = include_bytes!("../static/icons/eye-slash.svg");

fn svg_icon<'a>(bytes: &'static [u8]) -> Svg<'a> {
    Svg::new(Handle::from_memory(bytes))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
}

pub fn lock_icon<'a>() -> Svg<'a> {
    svg_icon(LOCK_ICON)
}

pub fn lock_open_icon<'a>() -> Svg<'a> {
    svg_icon(LOCK_OPEN_ICON)
}

pub fn cross_icon<'a>() -> Svg<'a> {
    svg_icon(CROSS_ICON)
}

pub fn info_icon<'a>() -> Svg<'a> {
    svg_icon(INFO_ICON)
}

pub fn eye_icon<'a>() -> Svg<'a> {
    svg_icon(EYE_ICON)
}

pub fn eye_slash_icon<'a>() -> Svg<'a> {
    svg_icon(EYE_SLASH_ICON)
}
