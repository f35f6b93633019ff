//! Theme configuration

use iced::Color;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const SPRITE_BACKDROP: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const PRIMARY_DISABLED: Color = Color::from_rgb(0.25, 0.3, 0.45);
    pub const DANGER: Color = Color::from_rgb(0.86, 0.21, 0.27);
    pub const DANGER_SURFACE: Color = Color::from_rgb(0.25, 0.1, 0.12);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
}
