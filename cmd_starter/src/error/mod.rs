//! Error types produced while discovering types and synthesising descriptors.

mod constructors;
mod types;

pub use types::{BoxError, StarterError, StarterResult};

#[cfg(test)]
mod tests;
