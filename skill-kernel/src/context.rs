//! String variable bag passed to native functions.

use std::collections::HashMap;

use skill_core::{Error, Result};

/// Name of the distinguished variable carrying the pipeline payload.
pub const INPUT_VARIABLE: &str = "input";

/// Named string variables available to a function invocation.
///
/// Single-argument functions read [`INPUT_VARIABLE`]; functions taking more
/// arguments read additional variables by name.
#[derive(Clone, Debug, Default)]
pub struct ContextVariables {
    vars: HashMap<String, String>,
}

impl ContextVariables {
    /// Creates an empty variable bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag seeded with the given input payload.
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        let mut vars = Self::new();
        vars.set_input(input);
        vars
    }

    /// Sets a named variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a named variable, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the value of a named variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Execution`] when the variable is not set.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::execution(format!("variable `{name}` is not set")))
    }

    /// Returns the input payload, or the empty string when unset.
    #[must_use]
    pub fn input(&self) -> &str {
        self.get(INPUT_VARIABLE).unwrap_or("")
    }

    /// Replaces the input payload.
    pub fn set_input(&mut self, input: impl Into<String>) -> &mut Self {
        self.set(INPUT_VARIABLE, input)
    }
}
