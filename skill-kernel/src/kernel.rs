//! Kernel: skill import, lookup, and pipeline execution.

use std::collections::HashMap;

use skill_core::{Error, Result, SkillName};
use tracing::{debug, info};

use crate::context::ContextVariables;
use crate::function::SkillFunction;
use crate::skill::{Skill, SkillHandle};

/// Host that owns imported skills and runs their functions.
#[derive(Debug, Default)]
pub struct Kernel {
    skills: HashMap<String, SkillHandle>,
}

impl Kernel {
    /// Starts building a kernel.
    #[must_use]
    pub fn builder() -> KernelBuilder {
        KernelBuilder::default()
    }

    /// Imports a skill under the given name and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] when the name fails validation, or
    /// [`Error::DuplicateSkill`] when the name is already taken.
    pub fn import_skill(&mut self, skill: Skill, name: impl Into<String>) -> Result<SkillHandle> {
        let name = SkillName::new(name)?;
        if self.skills.contains_key(name.as_str()) {
            return Err(Error::DuplicateSkill {
                skill: name.as_str().to_owned(),
            });
        }

        let handle = SkillHandle::new(name.clone(), skill.into_functions());
        info!(
            skill = %name,
            functions = handle.metadata().len(),
            "imported skill"
        );
        self.skills.insert(name.as_str().to_owned(), handle.clone());
        Ok(handle)
    }

    /// Returns the handle of an imported skill.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSkill`] when no skill with that name is
    /// imported.
    pub fn skill(&self, name: &str) -> Result<&SkillHandle> {
        self.skills.get(name).ok_or_else(|| Error::UnknownSkill {
            skill: name.to_owned(),
        })
    }

    /// Resolves a function by skill and function name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSkill`] or [`Error::UnknownFunction`] when
    /// either component does not resolve.
    pub fn func(&self, skill: &str, function: &str) -> Result<SkillFunction> {
        self.skill(skill)?.get(function)
    }

    /// Lists the handles of all imported skills.
    #[must_use]
    pub fn skills(&self) -> Vec<&SkillHandle> {
        let mut listing: Vec<_> = self.skills.values().collect();
        listing.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        listing
    }

    /// Runs a pipeline of functions on the given input.
    ///
    /// The context is seeded with `input`; each function's output becomes the
    /// input of the next. Returns the final output, or the input unchanged
    /// when the pipeline is empty.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a function in the pipeline.
    pub async fn run(&self, input: impl Into<String>, pipeline: &[SkillFunction]) -> Result<String> {
        self.run_with_variables(ContextVariables::with_input(input), pipeline)
            .await
    }

    /// Runs a pipeline of functions with pre-populated context variables.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a function in the pipeline.
    pub async fn run_with_variables(
        &self,
        mut variables: ContextVariables,
        pipeline: &[SkillFunction],
    ) -> Result<String> {
        for function in pipeline {
            debug!(function = %function.metadata().name(), "running pipeline step");
            let output = function.invoke(variables.clone()).await?;
            variables.set_input(output);
        }
        Ok(variables.input().to_owned())
    }
}

/// Builder for [`Kernel`] instances.
///
/// The kernel currently needs no configuration; the builder exists so hosts
/// are constructed the same way as the rest of the workspace's types.
#[derive(Debug, Default)]
pub struct KernelBuilder {}

impl KernelBuilder {
    /// Finishes building the kernel.
    #[must_use]
    pub fn build(self) -> Kernel {
        Kernel::default()
    }
}
