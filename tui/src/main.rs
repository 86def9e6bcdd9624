use std::env;
use std::io;

use clap::Parser;
use crossterm::terminal;
use powertab_core::DrawData;
use powertab_core::SessionSnapshot;
use powertab_core::StaticOptions;
use powertab_core::SystemEnv;
use powertab_core::TabBar;
use powertab_core::TabBarConfig;
use powertab_core::TabDescriptor;
use powertab_core::WindowTitles;
use powertab_core::default_config_path;
use powertab_core::load_config;
use powertab_tui::TabRow;
use powertab_tui::ansi::write_row;
use powertab_tui::logging::init_file_logging;
use powertab_tui::render_tab_bar;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

mod cli;

use cli::Cli;

const FALLBACK_COLUMNS: u16 = 80;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = cli.log_dir.as_deref().map(init_file_logging).transpose()?;

    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => TabBarConfig::default(),
    };
    let columns = cli
        .columns
        .or_else(|| terminal::size().ok().map(|(columns, _)| columns))
        .unwrap_or(FALLBACK_COLUMNS);

    let row = tab_row(&cli);
    let session = session_snapshot(&cli, &row);
    let bar = TabBar::new(&StaticOptions::default(), config);

    let area = Rect::new(0, 0, columns, 1);
    let mut buf = Buffer::empty(area);
    render_tab_bar(
        &bar,
        &session,
        &SystemEnv,
        &DrawData::default(),
        &row,
        area,
        &mut buf,
    );
    write_row(&mut io::stdout().lock(), &buf)?;
    Ok(())
}

fn tab_row(cli: &Cli) -> TabRow {
    let titles = if cli.tabs.is_empty() {
        vec![String::new()]
    } else {
        cli.tabs.clone()
    };
    let tabs = titles
        .into_iter()
        .enumerate()
        .map(|(i, title)| TabDescriptor::new(title, i + 1 == cli.active))
        .collect();
    TabRow::new(tabs, cli.max_title_length)
}

fn session_snapshot(cli: &Cli, row: &TabRow) -> SessionSnapshot {
    let active_cwd = cli.cwd.clone().or_else(|| {
        env::current_dir()
            .ok()
            .map(|dir| dir.to_string_lossy().into_owned())
    });
    let active_title = env::var("SHELL")
        .ok()
        .and_then(|shell| shell.rsplit('/').next().map(str::to_string));
    let mut windows: Vec<WindowTitles> = row
        .tabs
        .iter()
        .map(|tab| WindowTitles::new(None, Some(tab.title.as_str())))
        .collect();
    windows.extend(
        cli.window_titles
            .iter()
            .map(|title| WindowTitles::new(Some(title.as_str()), None)),
    );
    SessionSnapshot {
        active_cwd,
        active_title,
        windows,
    }
}
