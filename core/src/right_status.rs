use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::config::Icons;
use crate::config::RightStatusWidth;
use crate::host::Screen;
use crate::palette::ColorPalette;

/// One visually distinct chunk of the right-hand block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RightStatusCell {
    pub fg: Color,
    pub bg: Color,
    pub text: String,
}

impl RightStatusCell {
    fn new(fg: Color, bg: Color, text: String) -> Self {
        Self { fg, bg, text }
    }
}

/// The user/host block painted flush right on the last tab, and the width
/// reserved for it on every tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RightStatus {
    cells: Vec<RightStatusCell>,
    width: u16,
}

impl RightStatus {
    pub fn build(
        palette: &ColorPalette,
        accent: Color,
        icons: &Icons,
        login_name: &str,
        hostname: &str,
        strategy: RightStatusWidth,
        margin: i16,
    ) -> Self {
        let user_text = format!("{}{login_name} {}", icons.user, icons.open);
        let host_text = format!("{hostname}{}", icons.host);
        let cells = vec![
            RightStatusCell::new(
                palette.active_background,
                palette.bar_background,
                icons.open.clone(),
            ),
            RightStatusCell::new(accent, palette.active_background, user_text),
            RightStatusCell::new(palette.foreground, accent, host_text),
        ];
        let width = reserved_width(&cells, strategy, margin);
        Self { cells, width }
    }

    pub fn cells(&self) -> &[RightStatusCell] {
        &self.cells
    }

    /// Cells kept free at the right edge of the row.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Column where the block starts on a row `columns` wide.
    pub fn start_column(&self, columns: u16) -> u16 {
        columns.saturating_sub(self.width)
    }

    /// Paints the block flush right and returns the cursor column after it.
    pub fn paint<S: Screen + ?Sized>(&self, screen: &mut S) -> u16 {
        screen.reset_attributes();
        let start = self.start_column(screen.columns());
        screen.set_cursor_x(start);
        screen.set_colors(Color::Reset, Color::Reset);
        for cell in &self.cells {
            screen.set_colors(cell.fg, cell.bg);
            screen.draw(&cell.text);
        }
        screen.cursor_x()
    }
}

fn reserved_width(cells: &[RightStatusCell], strategy: RightStatusWidth, margin: i16) -> u16 {
    let content: i64 = match strategy {
        RightStatusWidth::Measured => cells
            .iter()
            .map(|cell| cell.text.width() as i64)
            .sum(),
        RightStatusWidth::ColorDigits => {
            2 + cells
                .iter()
                .map(|cell| packed_color_width(cell.bg) as i64)
                .sum::<i64>()
        }
    };
    let total = (content + i64::from(margin)).clamp(0, i64::from(u16::MAX));
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// Decimal width of `color` packed the way terminal cell attributes store it:
/// 24-bit colors as `rgb << 8 | 2`, palette indices as `index << 8 | 1`, and
/// the default color as `0`.
pub fn packed_color_width(color: Color) -> usize {
    let packed: u64 = match color {
        Color::Reset => 0,
        Color::Rgb(r, g, b) => {
            let rgb = (u64::from(r) << 16) | (u64::from(g) << 8) | u64::from(b);
            (rgb << 8) | 2
        }
        Color::Indexed(index) => (u64::from(index) << 8) | 1,
        named => (u64::from(ansi_index(named)) << 8) | 1,
    };
    packed.to_string().len()
}

fn ansi_index(color: Color) -> u8 {
    match color {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        Color::Indexed(index) => index,
        Color::Reset | Color::Rgb(..) => 0,
    }
}
