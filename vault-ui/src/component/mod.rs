pub mod button;
pub mod form;
pub mod notification;
pub mod text;
