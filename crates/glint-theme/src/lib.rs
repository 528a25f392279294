#![forbid(unsafe_code)]

//! Theme support for glint.
//!
//! Split along the effect boundary:
//! - [`palette`]: pure data — the theme signal, the ten variable names, and
//!   the fixed light/dark value tables.
//! - [`switcher`]: the side effect — writing a palette through a
//!   [`StyleRoot`] and the bus-driven [`ThemeSwitcher`] lifecycle binding.

pub mod palette;
pub mod switcher;

pub use palette::{Palette, ThemeMode, ThemeVar};
pub use switcher::{StyleRoot, THEME_CHANGE, ThemeSwitcher, apply_palette};
