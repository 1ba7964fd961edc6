//! Descriptive metadata attached to native functions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::FunctionName;

/// Metadata describing a native function for discovery by a host.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionMetadata {
    name: FunctionName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_description: Option<String>,
}

impl FunctionMetadata {
    /// Creates metadata for the supplied function name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`](crate::Error::InvalidName) if the name
    /// fails validation.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: FunctionName::new(name)?,
            description: None,
            input_description: None,
        })
    }

    /// Sets the human-readable description of what the function does.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the description of the function's primary input.
    #[must_use]
    pub fn with_input_description(mut self, input_description: impl Into<String>) -> Self {
        self.input_description = Some(input_description.into());
        self
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the optional input description.
    #[must_use]
    pub fn input_description(&self) -> Option<&str> {
        self.input_description.as_deref()
    }
}
