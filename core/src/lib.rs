//! Powerline tab bar for terminal multiplexer sessions.
//!
//! The host drives a [`RenderPass`] once per redraw, calling
//! [`RenderPass::draw_tab`] for every tab from left to right.

mod config;
mod env;
mod error;
mod host;
mod palette;
mod pass;
mod path;
mod right_status;
mod segments;
mod separator;
mod session;

#[cfg(test)]
mod test_support;

pub use config::DEFAULT_MAX_CWD_DEPTH;
pub use config::DEFAULT_SESSION_MARKER;
pub use config::Icons;
pub use config::RightStatusWidth;
pub use config::TabBarConfig;
pub use config::default_config_path;
pub use config::load_config;
pub use config::parse_config;
pub use env::FixedEnv;
pub use env::ProcessEnv;
pub use env::SystemEnv;
pub use error::ConfigError;
pub use error::Result;
pub use host::ColorScope;
pub use host::DrawData;
pub use host::ExtraData;
pub use host::Screen;
pub use host::TabDescriptor;
pub use host::TabSlot;
pub use palette::ColorPalette;
pub use palette::ColorSlot;
pub use palette::OptionsStore;
pub use palette::StaticOptions;
pub use palette::contrast_ratio;
pub use pass::RenderPass;
pub use pass::TabBar;
pub use path::format_cwd;
pub use right_status::RightStatus;
pub use right_status::RightStatusCell;
pub use separator::Separator;
pub use session::SessionSnapshot;
pub use session::SessionView;
pub use session::WindowTitles;
pub use session::is_special_session;

/// Catppuccin-derived colors used by [`StaticOptions`] and [`DrawData`] defaults.
pub mod colors {
    pub use crate::palette::BASE;
    pub use crate::palette::BLUE;
    pub use crate::palette::LAVENDER;
    pub use crate::palette::RED;
    pub use crate::palette::SUBTEXT0;
    pub use crate::palette::SURFACE0;
    pub use crate::palette::SURFACE2;
    pub use crate::palette::TEXT;
}
