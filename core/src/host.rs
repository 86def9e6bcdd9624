//! Host-side types: the cell grid cursor and the per-tab draw context.

use std::ops::Deref;
use std::ops::DerefMut;

use ratatui::style::Color;

use crate::palette::BASE;
use crate::palette::LAVENDER;
use crate::palette::SUBTEXT0;
use crate::palette::SURFACE0;

/// The host's cell grid and cursor for the tab bar row.
///
/// The tab bar only moves the cursor horizontally and only changes the
/// foreground and background of what it draws.
pub trait Screen {
    /// Width of the tab bar row in cells.
    fn columns(&self) -> u16;

    fn cursor_x(&self) -> u16;
    fn set_cursor_x(&mut self, x: u16);

    fn cursor_fg(&self) -> Color;
    fn cursor_bg(&self) -> Color;
    fn set_cursor_fg(&mut self, color: Color);
    fn set_cursor_bg(&mut self, color: Color);

    fn set_colors(&mut self, fg: Color, bg: Color) {
        self.set_cursor_fg(fg);
        self.set_cursor_bg(bg);
    }

    /// Draws `text` at the cursor with the cursor colors and advances the
    /// cursor past it.
    fn draw(&mut self, text: &str);

    /// Resets the cursor's drawing attributes to the terminal defaults.
    fn reset_attributes(&mut self);

    /// Draws the tab's title, truncated to fit `max_title_length` cells.
    fn draw_title(
        &mut self,
        draw_data: &DrawData,
        tab: &TabDescriptor,
        index: usize,
        max_title_length: usize,
    );
}

/// Saves the cursor colors and restores them when dropped, so every early
/// return of a segment leaves the cursor colors as it found them.
pub struct ColorScope<'s, S: Screen + ?Sized> {
    screen: &'s mut S,
    fg: Color,
    bg: Color,
}

impl<'s, S: Screen + ?Sized> ColorScope<'s, S> {
    pub fn new(screen: &'s mut S) -> Self {
        let fg = screen.cursor_fg();
        let bg = screen.cursor_bg();
        Self { screen, fg, bg }
    }

    /// Foreground saved when the scope was opened.
    pub fn saved_fg(&self) -> Color {
        self.fg
    }

    /// Background saved when the scope was opened.
    pub fn saved_bg(&self) -> Color {
        self.bg
    }
}

impl<S: Screen + ?Sized> Deref for ColorScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.screen
    }
}

impl<S: Screen + ?Sized> DerefMut for ColorScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.screen
    }
}

impl<S: Screen + ?Sized> Drop for ColorScope<'_, S> {
    fn drop(&mut self) {
        self.screen.set_colors(self.fg, self.bg);
    }
}

/// One tab as the host describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabDescriptor {
    pub title: String,
    pub is_active: bool,
}

impl TabDescriptor {
    pub fn new(title: impl Into<String>, is_active: bool) -> Self {
        Self {
            title: title.into(),
            is_active,
        }
    }
}

/// Tab colors the host uses for the whole bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawData {
    pub default_bg: Color,
    pub active_fg: Color,
    pub active_bg: Color,
    pub inactive_fg: Color,
    pub inactive_bg: Color,
}

impl Default for DrawData {
    fn default() -> Self {
        Self {
            default_bg: BASE,
            active_fg: BASE,
            active_bg: LAVENDER,
            inactive_fg: SUBTEXT0,
            inactive_bg: SURFACE0,
        }
    }
}

impl DrawData {
    pub fn tab_bg(&self, tab: &TabDescriptor) -> Color {
        if tab.is_active {
            self.active_bg
        } else {
            self.inactive_bg
        }
    }

    pub fn tab_fg(&self, tab: &TabDescriptor) -> Color {
        if tab.is_active {
            self.active_fg
        } else {
            self.inactive_fg
        }
    }
}

/// Per-pass extras the host hands to every tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraData {
    /// The tab drawn after this one, if any.
    pub next_tab: Option<TabDescriptor>,
}

/// Everything the host passes for one tab of a redraw pass.
#[derive(Debug, Clone, Copy)]
pub struct TabSlot<'a> {
    pub tab: &'a TabDescriptor,
    /// Column the host would insert this tab before.
    pub before: u16,
    pub max_title_length: usize,
    /// 1-based position of the tab in the row.
    pub index: usize,
    pub is_last: bool,
    pub extra: &'a ExtraData,
}
