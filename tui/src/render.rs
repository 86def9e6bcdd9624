//! Plays the host side of a redraw pass over a ratatui buffer.

use powertab_core::DrawData;
use powertab_core::ExtraData;
use powertab_core::ProcessEnv;
use powertab_core::Screen;
use powertab_core::SessionView;
use powertab_core::TabBar;
use powertab_core::TabDescriptor;
use powertab_core::TabSlot;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tracing::debug;

use crate::buffer_screen::BufferScreen;

/// Tabs of the row, left to right, and the host's title limit.
#[derive(Debug, Clone)]
pub struct TabRow {
    pub tabs: Vec<TabDescriptor>,
    pub max_title_length: usize,
}

impl TabRow {
    pub fn new(tabs: Vec<TabDescriptor>, max_title_length: usize) -> Self {
        Self {
            tabs,
            max_title_length,
        }
    }
}

/// Renders the whole tab bar into the first row of `area` and returns the
/// final cursor column.
///
/// An active tab with an empty title shows the active window's title.
pub fn render_tab_bar(
    bar: &TabBar,
    session: &dyn SessionView,
    env: &dyn ProcessEnv,
    draw_data: &DrawData,
    row: &TabRow,
    area: Rect,
    buf: &mut Buffer,
) -> u16 {
    let row_area = Rect {
        height: area.height.min(1),
        ..area
    };
    buf.set_style(row_area, Style::default().bg(bar.palette().bar_background));

    let active_title = session.active_title().unwrap_or_default();
    let tabs: Vec<TabDescriptor> = row
        .tabs
        .iter()
        .map(|tab| {
            if tab.is_active && tab.title.is_empty() {
                TabDescriptor::new(active_title.clone(), true)
            } else {
                tab.clone()
            }
        })
        .collect();

    let mut screen = BufferScreen::new(buf, row_area);
    let mut pass = bar.begin_pass(session, env);
    debug!(
        tabs = tabs.len(),
        columns = row_area.width,
        reserved = pass.reserved_width(),
        "rendering tab bar"
    );
    for (i, tab) in tabs.iter().enumerate() {
        let extra = ExtraData {
            next_tab: tabs.get(i + 1).cloned(),
        };
        let slot = TabSlot {
            tab,
            before: screen.cursor_x(),
            max_title_length: row.max_title_length,
            index: i + 1,
            is_last: i + 1 == tabs.len(),
            extra: &extra,
        };
        screen.set_colors(draw_data.tab_fg(tab), draw_data.tab_bg(tab));
        pass.draw_tab(draw_data, &mut screen, &slot);
    }
    screen.cursor_x()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use powertab_core::FixedEnv;
    use powertab_core::Icons;
    use powertab_core::SessionSnapshot;
    use powertab_core::StaticOptions;
    use powertab_core::TabBarConfig;
    use powertab_core::WindowTitles;
    use powertab_core::colors::LAVENDER;
    use powertab_core::colors::RED;
    use pretty_assertions::assert_eq;

    fn ascii_icons() -> Icons {
        Icons {
            main: "M".to_string(),
            special: "S".to_string(),
            open: "<".to_string(),
            close: ">".to_string(),
            soft: "|".to_string(),
            truncate: "~".to_string(),
            home: "H:".to_string(),
            cwd_spacer: " ".to_string(),
            root_descended: "R:".to_string(),
            root_base: "/".to_string(),
            user: "u:".to_string(),
            host: " h".to_string(),
        }
    }

    fn ascii_bar() -> TabBar {
        let config = TabBarConfig {
            icons: ascii_icons(),
            ..TabBarConfig::default()
        };
        TabBar::new(&StaticOptions::default(), config)
    }

    fn session(windows: Vec<WindowTitles>) -> SessionSnapshot {
        SessionSnapshot {
            active_cwd: Some("/home/alice/projects/app".to_string()),
            active_title: Some("vim".to_string()),
            windows,
        }
    }

    fn render(
        bar: &TabBar,
        session: &SessionSnapshot,
        tabs: Vec<TabDescriptor>,
        columns: u16,
    ) -> Buffer {
        let area = Rect::new(0, 0, columns, 1);
        let mut buf = Buffer::empty(area);
        let env = FixedEnv::new("alice", "devbox");
        let row = TabRow::new(tabs, 16);
        render_tab_bar(bar, session, &env, &DrawData::default(), &row, area, &mut buf);
        buf
    }

    fn row_symbols(buf: &Buffer) -> Vec<String> {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    fn row_text(buf: &Buffer) -> String {
        row_symbols(buf).concat()
    }

    #[test]
    fn renders_icon_cwd_titles_and_flush_right_status() {
        let bar = ascii_bar();
        let buf = render(
            &bar,
            &session(Vec::new()),
            vec![
                TabDescriptor::new("zsh", true),
                TabDescriptor::new("logs", false),
            ],
            60,
        );
        assert_snapshot!(
            row_text(&buf),
            @"M>H:projects/app> < zsh > logs >          <u:alice <devbox h"
        );
        // Right block starts on a separator in the active background.
        let start = &buf[(42, 0)];
        assert_eq!(start.symbol(), "<");
        assert_eq!(start.fg, bar.palette().active_background);
    }

    #[test]
    fn special_session_paints_red_accent() {
        let bar = ascii_bar();
        let buf = render(
            &bar,
            &session(vec![WindowTitles::new(Some("claude"), Some("thinking"))]),
            vec![TabDescriptor::new("zsh", true)],
            60,
        );
        assert_eq!(buf[(0, 0)].symbol(), "S");
        assert_eq!(buf[(0, 0)].bg, RED);
        assert_eq!(buf[(59, 0)].bg, RED);
    }

    #[test]
    fn long_title_never_overlaps_right_status() {
        let bar = ascii_bar();
        let buf = render(
            &bar,
            &session(Vec::new()),
            vec![TabDescriptor::new("x".repeat(80), true)],
            50,
        );
        let limit = 50 - 18;
        let symbols = row_symbols(&buf);
        let right: String = symbols[limit..].concat();
        assert_eq!(right, "<u:alice <devbox h");
        // The truncated title, its space and closing arrow end right before the block.
        assert_eq!(symbols[limit - 3..limit].concat(), "… >");
        let title_cells = symbols[..limit].iter().filter(|s| s.as_str() == "x").count();
        assert_eq!(title_cells, 9);
    }

    #[test]
    fn empty_active_title_uses_active_window_title() {
        let bar = ascii_bar();
        let buf = render(
            &bar,
            &session(Vec::new()),
            vec![TabDescriptor::new("", true)],
            60,
        );
        let text = row_text(&buf);
        assert!(text.contains("< vim >"), "{text}");
        assert_eq!(buf[(20, 0)].bg, LAVENDER);
    }

    #[test]
    fn every_tab_past_the_reserved_area_is_skipped() {
        let bar = ascii_bar();
        let tabs: Vec<TabDescriptor> = (0..6)
            .map(|i| TabDescriptor::new(format!("t{i}"), i == 0))
            .collect();
        let buf = render(&bar, &session(Vec::new()), tabs, 50);
        let text = row_text(&buf);
        assert!(text.contains("t0"), "{text}");
        assert!(!text.contains("t2"), "{text}");
        assert!(!text.contains("t5"), "{text}");
        // The third tab would need cells 29..33, so the left side stops at its
        // soft tick and the gap up to the block stays blank.
        let limit = 50 - 18;
        let symbols = row_symbols(&buf);
        assert_eq!(symbols[24..limit].concat(), " t1 |   ");
        assert_eq!(symbols[limit..].concat(), "<u:alice <devbox h");
    }
}
