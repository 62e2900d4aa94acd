//! Light theme palette

use iced::Color;

pub const BACKGROUND: Color = Color::WHITE;
pub const SURFACE: Color = Color::from_rgb(0.98, 0.99, 1.0);
pub const BORDER: Color = Color::from_rgb(0.85, 0.91, 0.97);
pub const BORDER_FOCUS: Color = Color::from_rgb(0.55, 0.75, 0.95);
pub const PRIMARY: Color = Color::from_rgb(0.23, 0.51, 0.96);
pub const TEXT: Color = Color::from_rgb(0.15, 0.18, 0.22);
pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.48, 0.55);
pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.62, 0.65, 0.7);
pub const URL_TEXT: Color = Color::from_rgb(0.09, 0.55, 0.33);
pub const ERROR_TEXT: Color = Color::from_rgb(0.73, 0.15, 0.15);
pub const ERROR_SURFACE: Color = Color::from_rgb(1.0, 0.95, 0.95);
pub const ERROR_BORDER: Color = Color::from_rgb(0.99, 0.79, 0.79);
pub const SELECTION: Color = Color::from_rgb(0.75, 0.85, 1.0);
