use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::host::DrawData;
use crate::host::Screen;
use crate::host::TabDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DrawOp {
    pub x: u16,
    pub fg: Color,
    pub bg: Color,
    pub text: String,
}

/// Screen that records every draw call instead of filling cells.
#[derive(Debug)]
pub(crate) struct RecordingScreen {
    pub columns: u16,
    pub x: u16,
    pub fg: Color,
    pub bg: Color,
    pub ops: Vec<DrawOp>,
    pub resets: usize,
}

impl RecordingScreen {
    pub fn new(columns: u16) -> Self {
        Self {
            columns,
            x: 0,
            fg: Color::Reset,
            bg: Color::Reset,
            ops: Vec::new(),
            resets: 0,
        }
    }

    pub fn text(&self) -> String {
        self.ops.iter().map(|op| op.text.as_str()).collect()
    }

    pub fn op_with_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops.iter().find(|op| op.text == text)
    }
}

impl Screen for RecordingScreen {
    fn columns(&self) -> u16 {
        self.columns
    }

    fn cursor_x(&self) -> u16 {
        self.x
    }

    fn set_cursor_x(&mut self, x: u16) {
        self.x = x;
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
        self.ops.push(DrawOp {
            x: self.x,
            fg: self.fg,
            bg: self.bg,
            text: text.to_string(),
        });
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.x = self.x.saturating_add(width);
    }

    fn reset_attributes(&mut self) {
        self.resets += 1;
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
        let title: String = tab.title.chars().take(max_title_length).collect();
        self.draw(&title);
    }
}
