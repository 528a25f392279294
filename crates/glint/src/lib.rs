#![forbid(unsafe_code)]

//! Public facade for the glint UI-support crates.
//!
//! Three independent pieces cooperate under a host UI framework:
//!
//! - [`bus`]: an in-process publish/subscribe channel, created once at
//!   application start and passed to every consumer.
//! - [`theme`]: the dark/light theme signal and the [`ThemeSwitcher`]
//!   lifecycle binding that writes the palette onto the style root.
//! - [`reveal`]: per-element viewport-intersection bindings toggling the
//!   reveal class.
//!
//! Theme changes flow `producer → bus → mounted switchers → style root`;
//! reveal bindings never touch the bus.

pub use glint_bus as bus;
pub use glint_reveal as reveal;
pub use glint_theme as theme;

pub use glint_bus::{EventBus, HandlerId, Subscription};
pub use glint_reveal::{ClassList, ObserverConfig, REVEAL_CLASS, RevealBinding};
pub use glint_theme::{
    Palette, StyleRoot, THEME_CHANGE, ThemeMode, ThemeSwitcher, ThemeVar, apply_palette,
};

/// Single-glob import for hosts embedding the subsystem.
pub mod prelude {
    pub use glint_bus::{EventBus, HandlerId, Subscription};
    pub use glint_reveal::{ClassList, ObserverConfig, REVEAL_CLASS, RevealBinding};
    pub use glint_theme::{
        Palette, StyleRoot, THEME_CHANGE, ThemeMode, ThemeSwitcher, ThemeVar, apply_palette,
    };
}
