//! Left-hand segments: leading icon, working directory and tab titles.

use ratatui::style::Color;
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use crate::config::Icons;
use crate::host::ColorScope;
use crate::host::DrawData;
use crate::host::Screen;
use crate::host::TabSlot;
use crate::palette::ColorPalette;
use crate::separator::Separator;

fn cells(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

pub(crate) struct Segments<'a> {
    pub icons: &'a Icons,
    pub palette: &'a ColorPalette,
    pub accent: Color,
    pub special: bool,
}

impl Segments<'_> {
    /// Column right after the leading icon and its separator.
    pub fn icon_end(&self) -> u16 {
        cells(&self.icons.main).saturating_add(cells(&self.icons.close))
    }

    /// Titles never start left of this column.
    fn title_floor(&self) -> u16 {
        cells(&self.icons.main)
    }

    /// Draws the bar's leading icon. Only the first tab owns it.
    pub fn draw_icon<S: Screen + ?Sized>(&self, screen: &mut S, index: usize) -> Option<u16> {
        if index != 1 {
            return None;
        }
        {
            let mut scope = ColorScope::new(&mut *screen);
            let outer_bg = scope.saved_bg();
            let icon = if self.special {
                &self.icons.special
            } else {
                &self.icons.main
            };
            scope.set_colors(self.palette.foreground, self.accent);
            scope.draw(icon);
            Separator::DescendingHard {
                fg: self.accent,
                bg: outer_bg,
            }
            .draw(&mut *scope, self.icons);
        }
        let end = self.icon_end();
        screen.set_cursor_x(end);
        Some(end)
    }

    /// Draws the active window's working directory after the icon. Only the
    /// first tab owns it.
    pub fn draw_cwd<S: Screen + ?Sized>(
        &self,
        screen: &mut S,
        index: usize,
        cwd: &str,
    ) -> Option<u16> {
        if index != 1 {
            return None;
        }
        {
            let mut scope = ColorScope::new(&mut *screen);
            scope.set_colors(self.accent, self.palette.active_background);
            scope.draw(cwd);
            Separator::DescendingHard {
                fg: self.palette.active_background,
                bg: self.palette.bar_background,
            }
            .draw(&mut *scope, self.icons);
            scope.draw(&self.icons.cwd_spacer);
        }
        let end = self
            .icon_end()
            .saturating_add(cells(cwd))
            .saturating_add(cells(&self.icons.close))
            .saturating_add(cells(&self.icons.cwd_spacer));
        screen.set_cursor_x(end);
        Some(end)
    }

    /// Draws one tab title with its separators and returns the cursor column.
    ///
    /// Nothing is drawn once the cursor has reached the reserved right-status
    /// area, or when the segment cannot end before it. The cursor colors on
    /// entry are the tab's own colors.
    pub fn draw_title<S: Screen + ?Sized>(
        &self,
        screen: &mut S,
        draw_data: &DrawData,
        slot: &TabSlot<'_>,
        reserved_width: u16,
    ) -> u16 {
        let limit = screen.columns().saturating_sub(reserved_width);
        if screen.cursor_x() >= limit {
            trace!(
                index = slot.index,
                x = screen.cursor_x(),
                limit,
                "no room left for tab title"
            );
            return screen.cursor_x();
        }

        let tab_fg = screen.cursor_fg();
        let tab_bg = screen.cursor_bg();
        let next_bg = slot.extra.next_tab.as_ref().map(|tab| draw_data.tab_bg(tab));
        let separator = Separator::trailing(draw_data, tab_fg, tab_bg, next_bg);

        // Leading and trailing spaces, at least one title cell, and the separator.
        let opening = if slot.index == 1 {
            cells(&self.icons.open)
        } else {
            0
        };
        let start = screen
            .cursor_x()
            .saturating_add(opening)
            .max(self.title_floor());
        let tail = 1 + cells(separator.glyph(self.icons));
        let title_cells = cells(&slot.tab.title).min(1);
        let end = start
            .saturating_add(1)
            .saturating_add(title_cells)
            .saturating_add(tail);
        if end > limit {
            trace!(
                index = slot.index,
                x = screen.cursor_x(),
                end,
                limit,
                "tab would run into the right status"
            );
            return screen.cursor_x();
        }

        let mut scope = ColorScope::new(&mut *screen);

        if slot.index == 1 {
            Separator::AscendingHard {
                fg: tab_bg,
                bg: self.palette.bar_background,
            }
            .draw(&mut *scope, self.icons);
            scope.set_colors(tab_fg, tab_bg);
        }

        let floor = self.title_floor();
        if scope.cursor_x() <= floor {
            scope.set_cursor_x(floor);
        }

        scope.draw(" ");
        let room = usize::from(limit.saturating_sub(scope.cursor_x().saturating_add(tail)));
        let max_title_length = slot.max_title_length.min(room);
        scope.set_cursor_bg(tab_bg);
        scope.draw_title(draw_data, slot.tab, slot.index, max_title_length);

        scope.set_colors(tab_fg, tab_bg);
        scope.draw(" ");
        separator.draw(&mut *scope, self.icons);
        scope.cursor_x()
    }
}
