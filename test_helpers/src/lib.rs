//! Test helpers shared across crates in the workspace.
//!
//! - [`hosts`] provides module hosts and modules that fail on demand.
//! - [`markers`] provides a marker provider that fails for chosen kinds.
//! - [`events`] records the events a guard emits.

pub mod events;
pub mod hosts;
pub mod markers;
