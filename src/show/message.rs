//! Centered greeting

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

/// Greeting shown after the fireworks
pub const NEW_YEAR_TEXT: &str = "Happy New Year 2025!";
/// Bold yellow
pub const NEW_YEAR_STYLE: &str = "1;33";

/// A styled line of text placed on a fixed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    styled: String,
}

impl Message {
    /// Wrap `text` in the given SGR style and a trailing reset
    pub fn styled(text: &str, style: &str) -> Self {
        Self {
            styled: format!("\x1b[{}m{}\x1b[0m", style, text),
        }
    }

    /// Use `styled` as is; embedded escape sequences are allowed
    pub fn raw(styled: impl Into<String>) -> Self {
        Self {
            styled: styled.into(),
        }
    }

    pub fn new_year() -> Self {
        Self::styled(NEW_YEAR_TEXT, NEW_YEAR_STYLE)
    }

    /// Text including escape sequences
    pub fn as_styled(&self) -> &str {
        &self.styled
    }

    /// Columns occupied on screen
    pub fn visible_width(&self) -> usize {
        visible_width(&self.styled)
    }

    /// Cursor column that centers the message on a `width` wide line
    pub fn centered_column(&self, width: u16) -> u16 {
        let visible = u16::try_from(self.visible_width()).unwrap_or(u16::MAX);
        width.saturating_sub(visible) / 2
    }

    /// Position the cursor on `row`, write the message and end the line
    pub fn render<W: Write>(&self, out: &mut W, row: u16, width: u16) -> io::Result<()> {
        let col = self.centered_column(width);
        write!(out, "\x1b[{};{}H{}", row, col, self.styled)?;
        writeln!(out)
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new_year()
    }
}

/// Display columns of `s` with CSI escape sequences removed.
/// Wide characters count as two columns.
pub fn visible_width(s: &str) -> usize {
    let mut chars = s.chars().peekable();
    let mut width = 0;
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            width += c.width().unwrap_or(0);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        // Parameters run until the final byte in '@'..='~'
        for c in chars.by_ref() {
            if ('@'..='~').contains(&c) {
                break;
            }
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_ignores_escapes() {
        assert_eq!(visible_width("plain"), 5);
        assert_eq!(visible_width("\x1b[1;33mHappy New Year 2025!\x1b[0m"), 20);
        assert_eq!(visible_width("\x1b[32m*\x1b[0m\x1b[5;14H"), 1);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_visible_width_wide_characters() {
        assert_eq!(visible_width("新年快乐"), 8);
        let message = Message::styled("新年快乐", NEW_YEAR_STYLE);
        assert_eq!(message.visible_width(), 8);
        assert_eq!(message.centered_column(80), 36);
    }

    #[test]
    fn test_styled_keeps_escapes() {
        let message = Message::styled("hi", "32");
        assert_eq!(message.as_styled(), "\x1b[32mhi\x1b[0m");
        assert_eq!(Message::raw("\x1b[35mhi").as_styled(), "\x1b[35mhi");
        assert_eq!(Message::default().as_styled(), Message::new_year().as_styled());
    }

    #[test]
    fn test_centering_independent_of_style() {
        let plain = Message::raw(NEW_YEAR_TEXT);
        let styled = Message::new_year();
        // The greeting is 20 visible characters, not 21, so (80 - 20) / 2
        // puts it at column 30 rather than 29.
        assert_eq!(plain.centered_column(80), 30);
        assert_eq!(styled.centered_column(80), plain.centered_column(80));
    }

    #[test]
    fn test_centering_narrow_width() {
        let message = Message::new_year();
        assert_eq!(message.centered_column(10), 0);
        assert_eq!(message.centered_column(21), 0);
        assert_eq!(message.centered_column(22), 1);
    }

    #[test]
    fn test_render() {
        let mut out = Vec::new();
        Message::new_year().render(&mut out, 12, 80).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[12;30H\x1b[1;33mHappy New Year 2025!\x1b[0m\n"
        );
    }
}
