#![forbid(unsafe_code)]

//! In-process publish/subscribe channel for glint.
//!
//! A single [`EventBus`] is created at application start and shared (via
//! cheap handle clones) by every component that needs to broadcast or react
//! to application-wide signals. There is no ambient global: whoever owns the
//! application lifecycle constructs the bus and passes it down.
//!
//! See [`bus`] for the delivery contract.

pub mod bus;

pub use bus::{EventBus, HandlerId, Subscription};
