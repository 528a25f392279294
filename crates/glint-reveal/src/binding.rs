#![forbid(unsafe_code)]

//! Reveal binding: one observation handle per decorated element.
//!
//! The host's visibility subsystem reports each element's visible fraction
//! through [`RevealBinding::deliver`]; the binding keeps the marker class in
//! sync with the latest ratio. Acquisition and release are paired through
//! the binding's lifetime: `attach` takes a shared element reference, and
//! `detach` (or drop) releases it, so an unmounted element is never retained.
//!
//! # Invariants
//!
//! 1. After a `deliver(ratio)`, the class is present iff
//!    `ratio >= threshold`.
//! 2. An already-present class is never added twice; an absent class is
//!    removed without error.
//! 3. `detach` is idempotent; `deliver` after detach is a silent no-op.
//! 4. Dropping the binding detaches, releasing the element reference on
//!    every exit path.
//! 5. No debouncing: every threshold crossing toggles.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

/// Marker class driving the CSS reveal animation.
pub const REVEAL_CLASS: &str = "scroll-in";

/// Observation parameters. Defaults match the shipped behavior: viewport
/// root, zero margin, 10% visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Margin, in pixels, grown around the viewport root.
    pub root_margin: f32,
    /// Minimum visible-area fraction for the element to count as in view.
    pub threshold: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: 0.0,
            threshold: 0.1,
        }
    }
}

/// Host element seam: the class list this binding mutates.
pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Observation handle tying one element to the visibility threshold.
///
/// Created with [`attach`](Self::attach); the host feeds visibility updates
/// via [`deliver`](Self::deliver). Detach on unmount, or let drop do it.
pub struct RevealBinding {
    element: Option<Rc<RefCell<dyn ClassList>>>,
    config: ObserverConfig,
}

impl RevealBinding {
    /// Begin observing `element` with the given parameters.
    #[must_use]
    pub fn attach(element: Rc<RefCell<dyn ClassList>>, config: ObserverConfig) -> Self {
        Self {
            element: Some(element),
            config,
        }
    }

    /// [`attach`](Self::attach) with [`ObserverConfig::default`].
    #[must_use]
    pub fn attach_default(element: Rc<RefCell<dyn ClassList>>) -> Self {
        Self::attach(element, ObserverConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> ObserverConfig {
        self.config
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    /// Sync the marker class with the element's current visible fraction.
    ///
    /// No-op when detached.
    pub fn deliver(&self, ratio: f32) {
        let Some(element) = &self.element else {
            return;
        };
        let mut element = element.borrow_mut();
        if ratio >= self.config.threshold {
            if !element.has_class(REVEAL_CLASS) {
                trace!(ratio, "reveal");
                element.add_class(REVEAL_CLASS);
            }
        } else if element.has_class(REVEAL_CLASS) {
            trace!(ratio, "conceal");
            element.remove_class(REVEAL_CLASS);
        }
    }

    /// Stop observing and release the element reference. Idempotent.
    ///
    /// The class is left in its last state; only future toggling stops.
    pub fn detach(&mut self) {
        self.element = None;
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for RevealBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealBinding")
            .field("attached", &self.is_attached())
            .field("config", &self.config)
            .finish()
    }
}
