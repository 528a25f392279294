#![forbid(unsafe_code)]

//! Viewport-intersection reveal binding for glint.
//!
//! Decorating an element with a [`RevealBinding`] toggles the `scroll-in`
//! class as the element crosses the visibility threshold; consuming
//! stylesheets define the actual transition. Independent of the event bus:
//! each binding only mutates its own element.

pub mod binding;

pub use binding::{ClassList, ObserverConfig, REVEAL_CLASS, RevealBinding};
