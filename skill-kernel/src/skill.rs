//! Skills: named groups of native functions.

use std::collections::HashMap;
use std::sync::Arc;

use skill_core::{Error, FunctionMetadata, Result, SkillName};

use crate::function::{NativeFunction, SkillFunction};

/// A group of native functions ready to be imported into a kernel.
///
/// A skill has no name of its own; the name is chosen at import time, the way
/// the host decides the namespace a plugin lives under.
#[derive(Debug, Default)]
pub struct Skill {
    functions: HashMap<String, SkillFunction>,
}

impl Skill {
    /// Starts building a skill.
    #[must_use]
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    pub(crate) fn into_functions(self) -> HashMap<String, SkillFunction> {
        self.functions
    }
}

/// Builder that collects annotated functions into a [`Skill`].
#[derive(Debug, Default)]
pub struct SkillBuilder {
    functions: HashMap<String, SkillFunction>,
}

impl SkillBuilder {
    /// Adds a native function under the name carried by its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFunction`] if a function with the same name
    /// was already added.
    pub fn add_function<F>(mut self, metadata: FunctionMetadata, function: F) -> Result<Self>
    where
        F: NativeFunction + 'static,
    {
        let name = metadata.name().as_str().to_owned();
        if self.functions.contains_key(&name) {
            return Err(Error::DuplicateFunction { function: name });
        }

        self.functions
            .insert(name, SkillFunction::new(metadata, Arc::new(function)));
        Ok(self)
    }

    /// Finishes building the skill.
    #[must_use]
    pub fn build(self) -> Skill {
        Skill {
            functions: self.functions,
        }
    }
}

/// Handle to an imported skill, used for direct function lookup.
#[derive(Clone, Debug)]
pub struct SkillHandle {
    name: SkillName,
    functions: Arc<HashMap<String, SkillFunction>>,
}

impl SkillHandle {
    pub(crate) fn new(name: SkillName, functions: HashMap<String, SkillFunction>) -> Self {
        Self {
            name,
            functions: Arc::new(functions),
        }
    }

    /// Returns the name the skill was imported under.
    #[must_use]
    pub fn name(&self) -> &SkillName {
        &self.name
    }

    /// Returns the function registered under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] when no function with that name is
    /// part of this skill.
    pub fn get(&self, function: &str) -> Result<SkillFunction> {
        self.functions
            .get(function)
            .cloned()
            .ok_or_else(|| Error::UnknownFunction {
                skill: self.name.as_str().to_owned(),
                function: function.to_owned(),
            })
    }

    /// Lists the metadata of every function in this skill.
    #[must_use]
    pub fn metadata(&self) -> Vec<FunctionMetadata> {
        let mut listing: Vec<_> = self
            .functions
            .values()
            .map(|function| function.metadata().clone())
            .collect();
        listing.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        listing
    }
}
