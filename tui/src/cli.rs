use std::path::PathBuf;

use clap::Parser;

/// Renders one tab bar row to stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Tab bar config file. Defaults to `powertab/config.toml` in the user
    /// config directory.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Row width in cells. Defaults to the terminal width.
    #[arg(long)]
    pub columns: Option<u16>,

    /// Tab title, left to right. Repeat for more tabs.
    #[arg(long = "tab", value_name = "TITLE")]
    pub tabs: Vec<String>,

    /// 1-based index of the active tab.
    #[arg(long, default_value_t = 1)]
    pub active: usize,

    /// Working directory of the active window. Defaults to the current
    /// directory.
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<String>,

    /// Initial title of another window in the group. Repeatable; used only to
    /// classify the session.
    #[arg(long = "window-title", value_name = "TITLE")]
    pub window_titles: Vec<String>,

    #[arg(long, default_value_t = 24)]
    pub max_title_length: usize,

    /// Write logs to `powertab.log` in this directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
