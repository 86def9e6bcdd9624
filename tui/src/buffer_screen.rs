use powertab_core::DrawData;
use powertab_core::Screen;
use powertab_core::TabDescriptor;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// [`Screen`] over one row of a ratatui [`Buffer`].
///
/// Text that would run past the right edge of `area` is clipped.
pub struct BufferScreen<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    x: u16,
    fg: Color,
    bg: Color,
}

impl<'b> BufferScreen<'b> {
    /// Screen over the first row of `area`.
    pub fn new(buf: &'b mut Buffer, area: Rect) -> Self {
        Self {
            buf,
            area,
            x: 0,
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }

    fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

impl Screen for BufferScreen<'_> {
    fn columns(&self) -> u16 {
        self.area.width
    }

    fn cursor_x(&self) -> u16 {
        self.x
    }

    fn set_cursor_x(&mut self, x: u16) {
        self.x = x.min(self.area.width);
    }

    fn cursor_fg(&self) -> Color {
        self.fg
    }

    fn cursor_bg(&self) -> Color {
        self.bg
    }

    fn set_cursor_fg(&mut self, color: Color) {
        self.fg = color;
    }

    fn set_cursor_bg(&mut self, color: Color) {
        self.bg = color;
    }

    fn draw(&mut self, text: &str) {
        let remaining = usize::from(self.area.width.saturating_sub(self.x));
        if remaining == 0 || self.area.height == 0 {
            return;
        }
        let style = self.style();
        let (end, _) = self.buf.set_stringn(
            self.area.x.saturating_add(self.x),
            self.area.y,
            text,
            remaining,
            style,
        );
        self.x = end.saturating_sub(self.area.x).min(self.area.width);
    }

    fn reset_attributes(&mut self) {
        self.fg = Color::Reset;
        self.bg = Color::Reset;
    }

    fn draw_title(
        &mut self,
        _draw_data: &DrawData,
        tab: &TabDescriptor,
        _index: usize,
        max_title_length: usize,
    ) {
        let title = truncate_to_width(&tab.title, max_title_length);
        self.draw(&title);
    }
}

/// Cuts `text` to at most `max_width` cells, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if used + width > max_width - 1 {
            break;
        }
        truncated.push_str(grapheme);
        used += width;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn draw_advances_cursor_and_applies_colors() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let mut screen = BufferScreen::new(&mut buf, area);
        screen.set_colors(Color::Blue, Color::Black);
        screen.draw("ab");
        screen.set_cursor_x(5);
        screen.draw("c");
        assert_eq!(screen.cursor_x(), 6);
        assert_eq!(row(&buf), "ab   c    ");
        assert_eq!(buf[(0, 0)].fg, Color::Blue);
        assert_eq!(buf[(0, 0)].bg, Color::Black);
    }

    #[test]
    fn draw_clips_at_right_edge() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let mut screen = BufferScreen::new(&mut buf, area);
        screen.set_cursor_x(2);
        screen.draw("xyz");
        assert_eq!(screen.cursor_x(), 4);
        screen.draw("more");
        assert_eq!(screen.cursor_x(), 4);
        assert_eq!(row(&buf), "  xy");
    }

    #[test]
    fn draw_respects_area_offset() {
        let full = Rect::new(0, 0, 8, 2);
        let area = Rect::new(2, 1, 4, 1);
        let mut buf = Buffer::empty(full);
        let mut screen = BufferScreen::new(&mut buf, area);
        screen.draw("ok");
        assert_eq!(screen.cursor_x(), 2);
        assert_eq!(buf[(2, 1)].symbol(), "o");
        assert_eq!(buf[(3, 1)].symbol(), "k");
    }

    #[test]
    fn titles_are_truncated_with_ellipsis() {
        assert_eq!(truncate_to_width("build", 10), "build");
        assert_eq!(truncate_to_width("build-server", 6), "build…");
        assert_eq!(truncate_to_width("build", 1), "…");
        assert_eq!(truncate_to_width("build", 0), "");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }
}
