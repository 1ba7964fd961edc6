//! Host kernel for native skills.
//!
//! This crate provides the building blocks the samples wire together: a
//! context variable bag, the [`NativeFunction`] trait, named skills built from
//! annotated functions, and a [`Kernel`] that imports skills and runs function
//! pipelines asynchronously.

#![warn(missing_docs, clippy::pedantic)]

mod context;
mod function;
mod kernel;
mod skill;

pub use context::{ContextVariables, INPUT_VARIABLE};
pub use function::{NativeFunction, SkillFunction};
pub use kernel::{Kernel, KernelBuilder};
pub use skill::{Skill, SkillBuilder, SkillHandle};
