//! Shared error definitions for the skill runtime.

use std::num::ParseFloatError;

use thiserror::Error;

/// Result alias used throughout the skill runtime.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering or invoking native functions.
#[derive(Debug, Error)]
pub enum Error {
    /// A skill or function name failed validation.
    #[error("invalid name `{name}`: {reason}")]
    InvalidName {
        /// The offending name string.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// A skill was imported under a name that is already taken.
    #[error("skill `{skill}` is already imported")]
    DuplicateSkill {
        /// Name of the offending skill.
        skill: String,
    },

    /// A function name collided with an existing one inside a skill.
    #[error("function `{function}` is already defined in this skill")]
    DuplicateFunction {
        /// Name of the offending function.
        function: String,
    },

    /// No skill with the requested name is imported.
    #[error("skill `{skill}` is not imported")]
    UnknownSkill {
        /// Name of the missing skill.
        skill: String,
    },

    /// The requested function does not exist within the skill.
    #[error("function `{function}` is not defined in skill `{skill}`")]
    UnknownFunction {
        /// Name of the skill that was searched.
        skill: String,
        /// Name of the missing function.
        function: String,
    },

    /// A string input could not be parsed as a number.
    #[error("invalid numeric input: {source}")]
    Parse {
        /// Source parsing error from the standard library.
        #[from]
        source: ParseFloatError,
    },

    /// A native function failed while executing.
    #[error("function execution failed: {reason}")]
    Execution {
        /// Human-readable error reported by the function body.
        reason: String,
    },
}

impl Error {
    /// Creates an execution error from the supplied reason.
    #[must_use]
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }
}
