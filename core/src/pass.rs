//! The tab bar and its per-redraw render pass.

use ratatui::style::Color;
use tracing::debug;
use tracing::trace;

use crate::config::TabBarConfig;
use crate::env::ProcessEnv;
use crate::host::DrawData;
use crate::host::Screen;
use crate::host::TabSlot;
use crate::palette::ColorPalette;
use crate::palette::OptionsStore;
use crate::path::format_cwd;
use crate::right_status::RightStatus;
use crate::segments::Segments;
use crate::session::SessionView;
use crate::session::is_special_session;

/// A configured tab bar. The palette is resolved once, when the bar is built.
#[derive(Debug, Clone)]
pub struct TabBar {
    config: TabBarConfig,
    palette: ColorPalette,
}

impl TabBar {
    pub fn new(options: &dyn OptionsStore, config: TabBarConfig) -> Self {
        Self {
            palette: ColorPalette::resolve(options),
            config,
        }
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Starts a redraw pass. Login name and hostname are read here, once per
    /// pass.
    pub fn begin_pass<'a>(
        &'a self,
        session: &'a dyn SessionView,
        env: &dyn ProcessEnv,
    ) -> RenderPass<'a> {
        let mut pass = RenderPass {
            bar: self,
            session,
            login_name: env.login_name().unwrap_or_default(),
            hostname: env.hostname().unwrap_or_default(),
            special: false,
            right_status: RightStatus::default(),
        };
        pass.reserve_right_width();
        pass
    }
}

/// State shared by every tab of one redraw pass.
///
/// The host calls [`RenderPass::draw_tab`] once per tab, left to right. Every
/// call recomputes the reserved right-status width from the same inputs, so the
/// width is the same for every tab of the pass.
pub struct RenderPass<'a> {
    bar: &'a TabBar,
    session: &'a dyn SessionView,
    login_name: String,
    hostname: String,
    special: bool,
    right_status: RightStatus,
}

impl RenderPass<'_> {
    /// Reclassifies the session, rebuilds the right-status block and returns
    /// the width it reserves.
    pub fn reserve_right_width(&mut self) -> u16 {
        let config = &self.bar.config;
        self.special = is_special_session(self.session, &config.session_marker);
        self.right_status = RightStatus::build(
            &self.bar.palette,
            self.accent(),
            &config.icons,
            &self.login_name,
            &self.hostname,
            config.right_status_width,
            config.effective_right_margin(),
        );
        let width = self.right_status.width();
        debug!(width, special = self.special, "reserved right status width");
        width
    }

    pub fn reserved_width(&self) -> u16 {
        self.right_status.width()
    }

    pub fn right_status(&self) -> &RightStatus {
        &self.right_status
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn accent(&self) -> Color {
        self.bar.palette.accent(self.special)
    }

    /// Paints the right-status block flush right. Called for the last tab only.
    pub fn paint_right_status<S: Screen + ?Sized>(&self, screen: &mut S) -> u16 {
        self.right_status.paint(screen)
    }

    /// Draws one tab and returns the new cursor column.
    ///
    /// The cursor colors on entry are the tab's own colors.
    pub fn draw_tab<S: Screen + ?Sized>(
        &mut self,
        draw_data: &DrawData,
        screen: &mut S,
        slot: &TabSlot<'_>,
    ) -> u16 {
        let reserved = self.reserve_right_width();
        let config = &self.bar.config;
        let segments = Segments {
            icons: &config.icons,
            palette: &self.bar.palette,
            accent: self.accent(),
            special: self.special,
        };

        segments.draw_icon(screen, slot.index);
        if slot.index == 1 {
            let cwd = self.cwd_display();
            segments.draw_cwd(screen, slot.index, &cwd);
        }
        segments.draw_title(screen, draw_data, slot, reserved);

        if slot.is_last {
            self.paint_right_status(screen);
        } else {
            screen.set_cursor_bg(self.bar.palette.foreground);
        }
        let x = screen.cursor_x();
        trace!(
            index = slot.index,
            before = slot.before,
            is_last = slot.is_last,
            x,
            "drew tab"
        );
        x
    }

    fn cwd_display(&self) -> String {
        let config = &self.bar.config;
        self.session
            .active_cwd()
            .map(|cwd| format_cwd(&cwd, &config.icons, config.max_cwd_depth))
            .unwrap_or_default()
    }
}
