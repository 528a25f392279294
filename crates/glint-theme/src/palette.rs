#![forbid(unsafe_code)]

//! Theme signal and the fixed light/dark palettes.
//!
//! Pure data only: the mapping from [`ThemeMode`] to an ordered set of
//! `(variable, value)` pairs. Nothing here touches a style root; applying a
//! palette lives in [`crate::switcher`], so the mapping is testable on its
//! own.
//!
//! The value tables are load-bearing: the global stylesheet consumes these
//! exact literals, so they must not drift.

/// Presentation mode carried by the theme signal (`true` = dark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<bool> for ThemeMode {
    fn from(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

/// The ten custom style properties written on every theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ThemeVar {
    Primary,
    Bg,
    Font,
    Warning,
    Success,
    Error,
    Info,
    Disabled,
    Link,
    Hover,
}

impl ThemeVar {
    /// Every variable, in write order.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::Bg,
        Self::Font,
        Self::Warning,
        Self::Success,
        Self::Error,
        Self::Info,
        Self::Disabled,
        Self::Link,
        Self::Hover,
    ];

    /// Custom-property name consumed by the global stylesheet.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::Bg => "--bg",
            Self::Font => "--font",
            Self::Warning => "--warning",
            Self::Success => "--success",
            Self::Error => "--error",
            Self::Info => "--info",
            Self::Disabled => "--disabled",
            Self::Link => "--link",
            Self::Hover => "--hover",
        }
    }
}

/// One complete set of color values for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    pub primary: &'static str,
    pub bg: &'static str,
    pub font: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub disabled: &'static str,
    pub link: &'static str,
    pub hover: &'static str,
}

impl Palette {
    pub const DARK: Self = Self {
        primary: "#718dff",
        bg: "#1d1e21",
        font: "#ffffff",
        warning: "#faad14",
        success: "#a8ff7d",
        error: "#f5222d",
        info: "#80c1ff",
        disabled: "#4e4e4e",
        link: "#a0b5ff",
        hover: "#d5e8ff",
    };

    pub const LIGHT: Self = Self {
        primary: "#1890ff",
        bg: "#ffffff",
        font: "#333333",
        warning: "#faad14",
        success: "#52c41a",
        error: "#f5222d",
        info: "#1890ff",
        disabled: "#bfbfbf",
        link: "#1890ff",
        hover: "#001764",
    };

    /// Palette for `mode`.
    #[must_use]
    pub const fn of(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Dark => &Self::DARK,
            ThemeMode::Light => &Self::LIGHT,
        }
    }

    /// Value of a single variable.
    #[must_use]
    pub const fn get(&self, var: ThemeVar) -> &'static str {
        match var {
            ThemeVar::Primary => self.primary,
            ThemeVar::Bg => self.bg,
            ThemeVar::Font => self.font,
            ThemeVar::Warning => self.warning,
            ThemeVar::Success => self.success,
            ThemeVar::Error => self.error,
            ThemeVar::Info => self.info,
            ThemeVar::Disabled => self.disabled,
            ThemeVar::Link => self.link,
            ThemeVar::Hover => self.hover,
        }
    }

    /// The ten `(variable, value)` pairs in write order.
    #[must_use]
    pub fn entries(&self) -> [(ThemeVar, &'static str); 10] {
        ThemeVar::ALL.map(|var| (var, self.get(var)))
    }
}
