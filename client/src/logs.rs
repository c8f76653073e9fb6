use std::fmt::Display;

use colored::{Color, Colorize};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Error,
    Warning,
    Info,
    Gray,
}

impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        match value {
            LogColor::Highlight => Color::TrueColor { r: 255, g: 215, b: 87 },
            LogColor::Label => Color::TrueColor { r: 40, g: 100, b: 153 },
            LogColor::Error => Color::TrueColor { r: 255, g: 0, b: 45 },
            LogColor::Warning => Color::TrueColor { r: 180, g: 105, b: 0 },
            LogColor::Info => Color::TrueColor { r: 0, g: 95, b: 255 },
            LogColor::Gray => Color::TrueColor { r: 192, g: 192, b: 192 },
        }
    }
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    println!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black(),
    );
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Level::Success, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Level::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}
