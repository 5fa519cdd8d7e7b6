//! Theme: dark panel palette and layout constants.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (transcript area).
    pub const BG: Color = Color::Rgb(0x17, 0x1b, 0x21);
    /// Input bar, status line, button row.
    pub const ELEVATED: Color = Color::Rgb(0x14, 0x18, 0x1e);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2c, 0x33, 0x3d);
    /// Primary accent (prompt, You label, button keys).
    pub const ACCENT: Color = Color::Rgb(0x7a, 0xc4, 0x8f);
    /// Support label, greeting.
    pub const ACCENT_SOFT: Color = Color::Rgb(0xa6, 0xdc, 0xb5);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf1, 0xf3, 0xf7);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xba, 0xc3, 0xce);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x92, 0x9c, 0xab);
    /// Inline code background.
    pub const CODE_BG: Color = Color::Rgb(0x1d, 0x23, 0x2d);
    /// Failed-reply entries.
    pub const ERROR: Color = Color::Rgb(0xef, 0x6a, 0x6a);
}

pub const INPUT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const BUTTONS_HEIGHT: u16 = 3;
pub const MIN_CHAT_LINES: u16 = 4;
/// Blank line between transcript entries.
pub const MESSAGE_GAP: usize = 1;
/// Inner horizontal margin (chars each side of the transcript).
pub const MARGIN_X: u16 = 1;
/// Floating panel bounds inside the terminal area.
pub const PANEL_MAX_WIDTH: u16 = 72;
pub const PANEL_MAX_HEIGHT: u16 = 26;

pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
