use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::Error as DeError;
use tracing::warn;

use crate::error::ConfigError;
use crate::error::Result;

const CONFIG_DIR: &str = "powertab";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_MAX_CWD_DEPTH: usize = 2;
pub const DEFAULT_SESSION_MARKER: &str = "claude";

/// Tab bar settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarConfig {
    /// Directory levels shown after the root or home icon before the path is
    /// truncated to its last `max_cwd_depth` components. Must be at least 1.
    #[serde(deserialize_with = "deserialize_depth")]
    pub max_cwd_depth: usize,
    /// Case-insensitive substring that marks a window as an assistant session.
    /// An empty marker disables classification.
    pub session_marker: String,
    /// Cells added to the reserved right-status width. Defaults depend on
    /// `right_status_width`.
    pub right_margin: Option<i16>,
    pub right_status_width: RightStatusWidth,
    pub icons: Icons,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            max_cwd_depth: DEFAULT_MAX_CWD_DEPTH,
            session_marker: DEFAULT_SESSION_MARKER.to_string(),
            right_margin: None,
            right_status_width: RightStatusWidth::default(),
            icons: Icons::default(),
        }
    }
}

impl TabBarConfig {
    pub fn effective_right_margin(&self) -> i16 {
        self.right_margin
            .unwrap_or_else(|| self.right_status_width.default_margin())
    }
}

/// How the width reserved for the right-hand status block is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RightStatusWidth {
    /// Display width of the cell texts.
    #[default]
    Measured,
    /// Decimal width of each cell's packed background color plus two. Kept for
    /// layouts tuned against the legacy tab bar.
    ColorDigits,
}

impl RightStatusWidth {
    pub fn default_margin(self) -> i16 {
        match self {
            RightStatusWidth::Measured => 0,
            RightStatusWidth::ColorDigits => -8,
        }
    }
}

/// Glyphs drawn by the tab bar. The defaults need a Nerd Font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    /// Leading icon for ordinary sessions.
    pub main: String,
    /// Leading icon for assistant sessions.
    pub special: String,
    /// Hard separator opening a segment (points left).
    pub open: String,
    /// Hard separator closing a segment (points right).
    pub close: String,
    /// Soft tick between tabs sharing a background.
    pub soft: String,
    pub truncate: String,
    pub home: String,
    pub cwd_spacer: String,
    pub root_descended: String,
    pub root_base: String,
    pub user: String,
    pub host: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            main: " \u{f179} ".to_string(),
            special: " \u{f0bc9} ".to_string(),
            open: "\u{e0b6}".to_string(),
            close: "\u{e0b4}".to_string(),
            soft: "\u{e0b5}".to_string(),
            truncate: " \u{2f59}".to_string(),
            home: " \u{2f95}".to_string(),
            cwd_spacer: " \u{f04e9} ".to_string(),
            root_descended: " \u{eb45} ".to_string(),
            root_base: " \u{eb46} ".to_string(),
            user: "\u{2f08}".to_string(),
            host: " \u{2fa5}".to_string(),
        }
    }
}

fn deserialize_depth<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let depth = usize::deserialize(deserializer)?;
    if depth == 0 {
        return Err(DeError::custom("max_cwd_depth must be at least 1"));
    }
    Ok(depth)
}

/// `$XDG_CONFIG_HOME/powertab/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn parse_config(contents: &str) -> Result<TabBarConfig> {
    Ok(toml::from_str(contents)?)
}

/// Loads the configuration at `path`.
///
/// A missing file yields the defaults. A file that fails to parse is logged and
/// also yields the defaults, so a typo never takes the tab bar down.
pub fn load_config(path: &Path) -> Result<TabBarConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(TabBarConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match parse_config(&contents) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("Ignoring tab bar config at {}: {err}", path.display());
            Ok(TabBarConfig::default())
        }
    }
}
