use tracing::debug;

/// Titles of one window, as used for session classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowTitles {
    /// Title set when the window was created (for example `--title claude`).
    pub initial: Option<String>,
    /// Title currently reported by the program in the window.
    pub live: Option<String>,
}

impl WindowTitles {
    pub fn new(initial: Option<&str>, live: Option<&str>) -> Self {
        Self {
            initial: initial.map(str::to_string),
            live: live.map(str::to_string),
        }
    }

    /// The title that decides classification: the initial title when one was
    /// set, otherwise the live title.
    pub fn classifying_title(&self) -> Option<&str> {
        self.initial
            .as_deref()
            .filter(|title| !title.is_empty())
            .or(self.live.as_deref())
            .filter(|title| !title.is_empty())
    }
}

/// Read-only view of the host's tab group.
///
/// Hosts answer `None` (or an empty list) for anything they cannot provide;
/// the tab bar treats missing data as neutral.
pub trait SessionView {
    /// Working directory of the active window.
    fn active_cwd(&self) -> Option<String>;

    /// Title of the active window.
    fn active_title(&self) -> Option<String>;

    /// Titles of every window in every tab of the active group.
    fn window_titles(&self) -> Vec<WindowTitles>;
}

/// Session state captured up front by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub active_cwd: Option<String>,
    pub active_title: Option<String>,
    pub windows: Vec<WindowTitles>,
}

impl SessionView for SessionSnapshot {
    fn active_cwd(&self) -> Option<String> {
        self.active_cwd.clone()
    }

    fn active_title(&self) -> Option<String> {
        self.active_title.clone()
    }

    fn window_titles(&self) -> Vec<WindowTitles> {
        self.windows.clone()
    }
}

/// Whether any window in the group was launched as an assistant session.
///
/// Matching is case-insensitive. An empty marker never matches.
pub fn is_special_session(session: &dyn SessionView, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let marker = marker.to_lowercase();
    let special = session.window_titles().iter().any(|window| {
        window
            .classifying_title()
            .is_some_and(|title| title.to_lowercase().contains(&marker))
    });
    debug!(special, "classified tab group");
    special
}
