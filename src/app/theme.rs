//! Shell colors, selected by the editor's `theme` option.

use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub gutter_fg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub header_fg: Color,
    pub active_file_bg: Color,
    pub active_file_fg: Color,
    pub activity_bg: Color,
    pub activity_fg: Color,
    pub activity_active_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("ZPAD_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        TerminalColorSupport::TrueColor
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl UiTheme {
    /// Unknown names get the plain ANSI palette.
    pub fn named(name: &str, support: TerminalColorSupport) -> Self {
        match (name.trim().to_ascii_lowercase().as_str(), support) {
            ("dracula", TerminalColorSupport::TrueColor) => Self::dracula(),
            _ => Self::ansi(),
        }
    }

    fn dracula() -> Self {
        let background = Color::Rgb(0x28, 0x2a, 0x36);
        let current_line = Color::Rgb(0x44, 0x47, 0x5a);
        let foreground = Color::Rgb(0xf8, 0xf8, 0xf2);
        let comment = Color::Rgb(0x62, 0x72, 0xa4);
        let cyan = Color::Rgb(0x8b, 0xe9, 0xfd);
        let purple = Color::Rgb(0xbd, 0x93, 0xf9);
        let red = Color::Rgb(0xff, 0x55, 0x55);

        Self {
            editor_bg: background,
            editor_fg: foreground,
            gutter_fg: comment,
            focus_border: purple,
            inactive_border: current_line,
            header_fg: cyan,
            active_file_bg: Color::Rgb(0xad, 0xd8, 0xe6),
            active_file_fg: background,
            activity_bg: current_line,
            activity_fg: comment,
            activity_active_fg: foreground,
            status_bg: purple,
            status_fg: background,
            muted_fg: comment,
            error_fg: red,
        }
    }

    fn ansi() -> Self {
        Self {
            editor_bg: Color::Reset,
            editor_fg: Color::Reset,
            gutter_fg: Color::DarkGray,
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            header_fg: Color::Cyan,
            active_file_bg: Color::LightBlue,
            active_file_fg: Color::Black,
            activity_bg: Color::Reset,
            activity_fg: Color::DarkGray,
            activity_active_fg: Color::White,
            status_bg: Color::DarkGray,
            status_fg: Color::White,
            muted_fg: Color::DarkGray,
            error_fg: Color::Red,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::ansi()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
