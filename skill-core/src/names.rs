//! Validated name newtypes for skills and functions.
//!
//! Lookups use the qualified `Skill.Function` form, so the dot is reserved as
//! a separator and rejected inside either component.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_NAME_LEN: usize = 64;

/// Name under which a group of functions is imported into a kernel.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillName(String);

impl SkillName {
    /// Creates a new skill name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty, too long, or
    /// contains whitespace or a dot.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Returns the skill name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SkillName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for SkillName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<SkillName> for String {
    fn from(value: SkillName) -> Self {
        value.0
    }
}

/// Name of a single native function within a skill.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionName(String);

impl FunctionName {
    /// Creates a new function name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty, too long, or
    /// contains whitespace or a dot.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Returns the function name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FunctionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for FunctionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<FunctionName> for String {
    fn from(value: FunctionName) -> Self {
        value.0
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: String::new(),
            reason: "name cannot be empty".into(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidName {
            name: name.into(),
            reason: format!("name length must be <= {MAX_NAME_LEN}"),
        });
    }

    if name.contains('.') {
        return Err(Error::InvalidName {
            name: name.into(),
            reason: "the dot is reserved as the qualified-name separator".into(),
        });
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidName {
            name: name.into(),
            reason: "name cannot contain whitespace".into(),
        });
    }

    Ok(())
}
