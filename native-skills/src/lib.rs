//! Native skill runtime SDK facade.
//!
//! Depend on this crate via `cargo add native-skills`. It bundles the internal
//! workspace crates behind feature flags so downstream users can enable or
//! disable components as needed.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use skill_core as core;

/// Host kernel and native function traits (enabled by `kernel` feature).
#[cfg(feature = "kernel")]
pub use skill_kernel as kernel;

/// Bundled math skill (enabled by `math` feature).
#[cfg(feature = "math")]
pub use skill_math as math;
