//! ratatui host for the powertab tab bar.

mod buffer_screen;
pub mod ansi;
pub mod logging;
mod render;

pub use buffer_screen::BufferScreen;
pub use render::TabRow;
pub use render::render_tab_bar;
