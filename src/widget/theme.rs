use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const LABEL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const COUNT_READY: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const COUNT_PENDING: Color = Color::Rgb(0x6b, 0x72, 0x80);
