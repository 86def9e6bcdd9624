use ratatui::style::Color;

use crate::config::Icons;
use crate::host::DrawData;
use crate::host::Screen;
use crate::palette::contrast_ratio;

/// Separator drawn at a segment boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Arrow opening a segment: `fg` is the segment being entered, `bg` the
    /// color it rises out of.
    AscendingHard { fg: Color, bg: Color },
    /// Arrow closing a segment: `fg` is the segment being left, `bg` the color
    /// it falls into.
    DescendingHard { fg: Color, bg: Color },
    /// Thin tick between two tabs sharing a background. `fg` overrides the
    /// cursor foreground when the ambient one would be invisible.
    Soft { fg: Option<Color> },
}

impl Separator {
    /// Separator after a tab with colors `tab_fg` on `tab_bg`.
    ///
    /// `next_bg` is the background of the following tab; the last tab closes
    /// into the default background with a hard arrow.
    pub fn trailing(
        draw_data: &DrawData,
        tab_fg: Color,
        tab_bg: Color,
        next_bg: Option<Color>,
    ) -> Self {
        match next_bg {
            Some(next_bg) if next_bg == tab_bg => Separator::Soft {
                fg: soft_tick_fg(draw_data, tab_fg, tab_bg),
            },
            Some(next_bg) => Separator::DescendingHard {
                fg: tab_bg,
                bg: next_bg,
            },
            None => Separator::DescendingHard {
                fg: tab_bg,
                bg: draw_data.default_bg,
            },
        }
    }

    pub fn glyph<'i>(self, icons: &'i Icons) -> &'i str {
        match self {
            Separator::AscendingHard { .. } => icons.open.as_str(),
            Separator::DescendingHard { .. } => icons.close.as_str(),
            Separator::Soft { .. } => icons.soft.as_str(),
        }
    }

    pub fn is_soft(self) -> bool {
        matches!(self, Separator::Soft { .. })
    }

    /// Draws the glyph. Hard separators leave their colors on the cursor; the
    /// soft tick restores the foreground it overrode.
    pub fn draw<S: Screen + ?Sized>(self, screen: &mut S, icons: &Icons) {
        match self {
            Separator::AscendingHard { fg, bg } | Separator::DescendingHard { fg, bg } => {
                screen.set_colors(fg, bg);
                screen.draw(self.glyph(icons));
            }
            Separator::Soft { fg } => {
                let previous = screen.cursor_fg();
                if let Some(fg) = fg {
                    screen.set_cursor_fg(fg);
                }
                screen.draw(self.glyph(icons));
                screen.set_cursor_fg(previous);
            }
        }
    }
}

/// Foreground for a soft tick, or `None` to keep the tab's own foreground.
///
/// The contrast check reads the inactive tab colors even when the tab is the
/// active one.
fn soft_tick_fg(draw_data: &DrawData, tab_fg: Color, tab_bg: Color) -> Option<Color> {
    if tab_bg == tab_fg {
        return Some(draw_data.default_bg);
    }
    if tab_bg != draw_data.default_bg {
        let against_default = contrast_ratio(draw_data.inactive_bg, draw_data.default_bg);
        let against_text = contrast_ratio(draw_data.inactive_bg, draw_data.inactive_fg);
        if let (Some(c1), Some(c2)) = (against_default, against_text)
            && c1 < c2
        {
            return Some(draw_data.default_bg);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::BASE;
    use crate::palette::BLUE;
    use crate::palette::LAVENDER;
    use crate::palette::SUBTEXT0;
    use crate::palette::SURFACE0;
    use crate::test_support::RecordingScreen;
    use pretty_assertions::assert_eq;

    const BACKGROUNDS: &[Color] = &[BASE, SURFACE0, LAVENDER, BLUE, Color::Reset];

    #[test]
    fn equal_backgrounds_are_soft_and_unequal_are_hard() {
        let draw_data = DrawData::default();
        for &tab_bg in BACKGROUNDS {
            for &next_bg in BACKGROUNDS {
                let separator = Separator::trailing(&draw_data, SUBTEXT0, tab_bg, Some(next_bg));
                if tab_bg == next_bg {
                    assert!(separator.is_soft(), "{tab_bg:?} -> {next_bg:?}");
                } else {
                    assert_eq!(
                        separator,
                        Separator::DescendingHard {
                            fg: tab_bg,
                            bg: next_bg
                        },
                        "{tab_bg:?} -> {next_bg:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn last_tab_closes_into_default_background() {
        let draw_data = DrawData::default();
        assert_eq!(
            Separator::trailing(&draw_data, SUBTEXT0, SURFACE0, None),
            Separator::DescendingHard {
                fg: SURFACE0,
                bg: draw_data.default_bg
            }
        );
    }

    #[test]
    fn soft_tick_uses_default_background_when_fg_matches_bg() {
        let draw_data = DrawData::default();
        assert_eq!(
            Separator::trailing(&draw_data, SURFACE0, SURFACE0, Some(SURFACE0)),
            Separator::Soft {
                fg: Some(draw_data.default_bg)
            }
        );
    }

    #[test]
    fn soft_tick_keeps_foreground_on_default_background() {
        let draw_data = DrawData::default();
        let bg = draw_data.default_bg;
        assert_eq!(
            Separator::trailing(&draw_data, SUBTEXT0, bg, Some(bg)),
            Separator::Soft { fg: None }
        );
    }

    #[test]
    fn soft_tick_contrast_rule_reads_inactive_colors() {
        // Inactive text contrasts with the inactive background more than the
        // default background does, so the tick takes the default background.
        let low_contrast_bar = DrawData::default();
        assert_eq!(
            Separator::trailing(&low_contrast_bar, BASE, LAVENDER, Some(LAVENDER)),
            Separator::Soft {
                fg: Some(low_contrast_bar.default_bg)
            }
        );

        // Dim inactive text loses to a bright default background.
        let bright_default = DrawData {
            default_bg: Color::Rgb(255, 255, 255),
            inactive_fg: Color::Rgb(60, 60, 60),
            inactive_bg: Color::Rgb(40, 40, 40),
            ..DrawData::default()
        };
        assert_eq!(
            Separator::trailing(&bright_default, BASE, LAVENDER, Some(LAVENDER)),
            Separator::Soft { fg: None }
        );
    }

    #[test]
    fn soft_draw_restores_foreground() {
        let icons = Icons::default();
        let mut screen = RecordingScreen::new(40);
        screen.set_colors(SUBTEXT0, SURFACE0);
        Separator::Soft { fg: Some(BASE) }.draw(&mut screen, &icons);
        assert_eq!(screen.cursor_fg(), SUBTEXT0);
        let op = screen.ops.last().expect("tick drawn");
        assert_eq!(op.text, icons.soft);
        assert_eq!(op.fg, BASE);
        assert_eq!(op.bg, SURFACE0);
    }

    #[test]
    fn hard_draw_uses_separator_colors() {
        let icons = Icons::default();
        let mut screen = RecordingScreen::new(40);
        Separator::AscendingHard {
            fg: LAVENDER,
            bg: BASE,
        }
        .draw(&mut screen, &icons);
        let op = screen.ops.last().expect("arrow drawn");
        assert_eq!(op.text, icons.open);
        assert_eq!((op.fg, op.bg), (LAVENDER, BASE));
    }
}
