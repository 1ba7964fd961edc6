//! Core shared types for the native-skills runtime.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod metadata;
mod names;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Descriptive metadata advertised for each native function.
pub use metadata::FunctionMetadata;
/// Validated skill and function name newtypes.
pub use names::{FunctionName, SkillName};
