//! Colors and text styles for the screen.
//!
//! Catalog entries carry their own button colors; this module holds the
//! chrome around them.

use ratzilla::ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(0x0F, 0x14, 0x19);
pub const SECTION: Color = Color::Rgb(0x1A, 0x23, 0x32);
pub const SECTION_BORDER: Color = Color::Rgb(0x2C, 0x3E, 0x50);
pub const GOLD: Color = Color::Rgb(0xFF, 0xD7, 0x00);
pub const SKY: Color = Color::Rgb(0x87, 0xCE, 0xEB);

pub const STYLE_SCREEN: Style = Style::new().bg(BACKGROUND);

/// Header title and section titles.
pub const STYLE_TITLE: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

pub const STYLE_SUBTITLE: Style = Style::new().fg(SKY).add_modifier(Modifier::ITALIC);

/// "Personaje actual: ..." line.
pub const STYLE_SELECTION: Style = Style::new().fg(SKY).add_modifier(Modifier::BOLD);

pub const STYLE_DIVIDER: Style = Style::new().fg(SECTION_BORDER);

pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Label text on every colored button.
pub const STYLE_BUTTON_TEXT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Modal frame.
pub const STYLE_MODAL: Style = Style::new().fg(Color::White).bg(SECTION);
pub const STYLE_MODAL_BORDER: Style = Style::new().fg(GOLD);
pub const STYLE_MODAL_BUTTON: Style = Style::new()
    .fg(Color::Black)
    .bg(SKY)
    .add_modifier(Modifier::BOLD);

/// Fill style for a button face, faded while the finger is down.
pub fn button_face(color: Color, pressed: bool) -> Style {
    let style = STYLE_BUTTON_TEXT.bg(color);
    if pressed {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_bold_gold() {
        assert_eq!(STYLE_TITLE.fg, Some(GOLD));
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn pressed_face_is_dimmed() {
        let red = Color::Rgb(0xE7, 0x4C, 0x3C);
        let idle = button_face(red, false);
        let held = button_face(red, true);
        assert_eq!(idle.bg, Some(red));
        assert_eq!(held.bg, Some(red));
        assert!(!idle.add_modifier.contains(Modifier::DIM));
        assert!(held.add_modifier.contains(Modifier::DIM));
    }
}
