use ratatui::style::Color;

pub const BASE: Color = Color::Rgb(30, 30, 46);
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const LAVENDER: Color = Color::Rgb(180, 190, 254);

/// Color options the host exposes through its option store.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSlot {
    /// Terminal background. Used as the foreground of filled segments.
    Background,
    /// ANSI red; the accent for assistant sessions.
    Color1,
    /// ANSI blue; the default accent.
    Color4,
    SelectionBackground,
    ActiveTabBackground,
}

/// Read-only view of the host's color options.
pub trait OptionsStore {
    fn color(&self, slot: ColorSlot) -> Color;

    /// Explicit tab bar background, or `None` when the host draws the bar with
    /// the terminal default.
    fn tab_bar_background(&self) -> Option<Color>;
}

/// Plain option store with fixed values, used by hosts that resolve their
/// options up front and by the preview binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticOptions {
    pub background: Color,
    pub color1: Color,
    pub color4: Color,
    pub selection_background: Color,
    pub active_tab_background: Color,
    pub tab_bar_background: Option<Color>,
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self {
            background: BASE,
            color1: RED,
            color4: BLUE,
            selection_background: SURFACE2,
            active_tab_background: SURFACE0,
            tab_bar_background: None,
        }
    }
}

impl OptionsStore for StaticOptions {
    fn color(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Background => self.background,
            ColorSlot::Color1 => self.color1,
            ColorSlot::Color4 => self.color4,
            ColorSlot::SelectionBackground => self.selection_background,
            ColorSlot::ActiveTabBackground => self.active_tab_background,
        }
    }

    fn tab_bar_background(&self) -> Option<Color> {
        self.tab_bar_background
    }
}

/// Colors resolved once per tab bar and reused for every pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColorPalette {
    pub foreground: Color,
    pub accent_blue: Color,
    pub accent_red: Color,
    pub selection_accent: Color,
    pub active_background: Color,
    /// `Color::Reset` when the host has no bar background override.
    pub bar_background: Color,
}

impl ColorPalette {
    pub fn resolve(options: &dyn OptionsStore) -> Self {
        Self {
            foreground: options.color(ColorSlot::Background),
            accent_blue: options.color(ColorSlot::Color4),
            accent_red: options.color(ColorSlot::Color1),
            selection_accent: options.color(ColorSlot::SelectionBackground),
            active_background: options.color(ColorSlot::ActiveTabBackground),
            bar_background: options.tab_bar_background().unwrap_or(Color::Reset),
        }
    }

    /// Accent for the whole bar: red for assistant sessions, blue otherwise.
    pub fn accent(&self, special_session: bool) -> Color {
        if special_session {
            self.accent_red
        } else {
            self.accent_blue
        }
    }
}

/// 24-bit components of `color`, or `None` for colors whose value is decided
/// by the terminal (reset, named and indexed colors).
pub fn rgb_components(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// WCAG 2 relative luminance.
pub fn relative_luminance(color: Color) -> Option<f64> {
    let (r, g, b) = rgb_components(color)?;
    let channel = |value: u8| {
        let c = f64::from(value) / 255.0;
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

/// WCAG 2 contrast ratio between two colors, in `1.0..=21.0`.
pub fn contrast_ratio(a: Color, b: Color) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}
