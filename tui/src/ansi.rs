//! Writes a rendered row as ANSI-styled text.

use std::io;
use std::io::Write;

use crossterm::queue;
use crossterm::style::Color as CrosstermColor;
use crossterm::style::Print;
use crossterm::style::ResetColor;
use crossterm::style::SetBackgroundColor;
use crossterm::style::SetForegroundColor;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

/// Writes the first row of `buf` to `out`, followed by a color reset and a
/// newline.
pub fn write_row<W: Write>(out: &mut W, buf: &Buffer) -> io::Result<()> {
    let area = buf.area;
    let mut skip = 0usize;
    let mut last: Option<(Color, Color)> = None;
    for x in area.x..area.x.saturating_add(area.width) {
        if skip > 0 {
            // Trailing half of a wide symbol.
            skip -= 1;
            continue;
        }
        let cell = &buf[(x, area.y)];
        if last != Some((cell.fg, cell.bg)) {
            queue!(
                out,
                SetForegroundColor(to_crossterm(cell.fg)),
                SetBackgroundColor(to_crossterm(cell.bg))
            )?;
            last = Some((cell.fg, cell.bg));
        }
        queue!(out, Print(cell.symbol()))?;
        skip = cell.symbol().width().saturating_sub(1);
    }
    queue!(out, ResetColor, Print("\n"))?;
    out.flush()
}

fn to_crossterm(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::Red => CrosstermColor::DarkRed,
        Color::Green => CrosstermColor::DarkGreen,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::Gray => CrosstermColor::Grey,
        Color::DarkGray => CrosstermColor::DarkGrey,
        Color::LightRed => CrosstermColor::Red,
        Color::LightGreen => CrosstermColor::Green,
        Color::LightYellow => CrosstermColor::Yellow,
        Color::LightBlue => CrosstermColor::Blue,
        Color::LightMagenta => CrosstermColor::Magenta,
        Color::LightCyan => CrosstermColor::Cyan,
        Color::White => CrosstermColor::White,
        Color::Indexed(index) => CrosstermColor::AnsiValue(index),
        Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
    }
}
