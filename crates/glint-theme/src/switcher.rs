#![forbid(unsafe_code)]

//! Bus-driven theme switching.
//!
//! [`apply_palette`] is the single effect boundary: it writes one full
//! palette through a [`StyleRoot`]. [`ThemeSwitcher`] is the lifecycle
//! binding around it — mount subscribes to the theme signal, drop
//! unsubscribes.
//!
//! # Invariants
//!
//! 1. Every apply writes all ten variables together, in table order; no
//!    partial update is observable between two applies.
//! 2. The subscription created by `mount` is the one released on drop, so
//!    removal always succeeds.
//! 3. After drop, no further writes reach the style root from this
//!    switcher.
//! 4. Concurrently mounted switchers each write redundantly; writes are
//!    identical for a given signal, so last-write-wins is safe.

use std::cell::RefCell;
use std::rc::Rc;

use glint_bus::{EventBus, Subscription};
use tracing::debug;

use crate::palette::{Palette, ThemeMode};

/// Event name carrying the theme signal. Payload: `bool`, `true` = dark.
pub const THEME_CHANGE: &str = "themeChange";

/// Write target for theme variables.
///
/// The host implements this over its document root. This subsystem only
/// ever writes; it never reads values back.
pub trait StyleRoot {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Write the full palette for `mode` through `root`, in table order.
pub fn apply_palette(root: &mut dyn StyleRoot, mode: ThemeMode) {
    debug!(?mode, "theme change");
    let palette = Palette::of(mode);
    for (var, value) in palette.entries() {
        root.set_property(var.css_name(), value);
    }
}

/// Lifecycle binding between the bus's theme signal and a style root.
///
/// Obtained from [`ThemeSwitcher::mount`]; dropping it (or calling
/// [`unmount`](Self::unmount)) releases the subscription.
pub struct ThemeSwitcher {
    _sub: Subscription<bool>,
}

impl ThemeSwitcher {
    /// Subscribe `root` to [`THEME_CHANGE`] signals on `bus`.
    #[must_use]
    pub fn mount(bus: &EventBus<bool>, root: Rc<RefCell<dyn StyleRoot>>) -> Self {
        let sub = bus.subscribe(THEME_CHANGE, move |is_dark: &bool| {
            apply_palette(&mut *root.borrow_mut(), ThemeMode::from(*is_dark));
        });
        Self { _sub: sub }
    }

    /// Release the subscription now. Equivalent to dropping the switcher.
    pub fn unmount(self) {}
}

impl std::fmt::Debug for ThemeSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSwitcher").finish()
    }
}
