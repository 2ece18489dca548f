//! Firework bursts
//!
//! A burst is a center point, one palette color and a fixed set of twelve
//! spokes drawn around the center.

use std::io::{self, Write};

use crossterm::{queue, style::{Print, ResetColor}};

use super::random::RandomSource;

/// Inclusive column range for burst centers
pub const X_RANGE: (i32, i32) = (15, 65);
/// Inclusive row range for burst centers
pub const Y_RANGE: (i32, i32) = (5, 15);

/// Glyph drawn at every spoke
pub const GLYPH: char = '*';

/// Relative `(dx, dy)` offsets of the spokes, in drawing order
pub const OFFSETS: [(i32, i32); 12] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (1, 1), (-1, 1), (1, -1),
    (0, -2), (0, 2), (-2, 0), (2, 0),
];

/// Terminal foreground colors a burst can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Blue,
    Magenta,
    Cyan,
}

/// Selectable colors, in sampling order
pub const PALETTE: [Color; 6] = [
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

impl Color {
    /// SGR foreground code
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }

    /// Escape sequence selecting this color
    pub fn escape(&self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

/// One randomly placed, single colored firework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    /// Center column (1-based)
    pub x: i32,
    /// Center row (1-based)
    pub y: i32,
    pub color: Color,
}

impl Burst {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Sample a burst: column, then row, then color
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let x = rng.uniform_int(X_RANGE.0, X_RANGE.1);
        let y = rng.uniform_int(Y_RANGE.0, Y_RANGE.1);
        let color = PALETTE[rng.choose_index(PALETTE.len())];
        Self { x, y, color }
    }

    /// Absolute `(column, row)` of every spoke, in drawing order.
    /// Not clamped to the terminal size.
    pub fn glyph_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        OFFSETS.iter().map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Write all spokes without line breaks between them
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let color = self.color.escape();
        for (col, row) in self.glyph_positions() {
            write!(out, "\x1b[{};{}H", row, col)?;
            queue!(out, Print(&color), Print(GLYPH), ResetColor)?;
        }
        Ok(())
    }
}
