//! Native function trait and invocation handles.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use skill_core::{FunctionMetadata, Result};
use tracing::debug;

use crate::context::ContextVariables;

/// Trait implemented by native function bodies.
///
/// A native function receives the invocation context and produces a string
/// result. Plain `async fn(ContextVariables) -> Result<String>` functions and
/// closures implement it through the blanket impl below.
#[async_trait]
pub trait NativeFunction: Send + Sync {
    /// Invokes the function with the given context variables.
    async fn invoke(&self, ctx: ContextVariables) -> Result<String>;
}

#[async_trait]
impl<F, Fut> NativeFunction for F
where
    F: Send + Sync + Fn(ContextVariables) -> Fut,
    Fut: Future<Output = Result<String>> + Send,
{
    async fn invoke(&self, ctx: ContextVariables) -> Result<String> {
        (self)(ctx).await
    }
}

/// Handle to a registered function, returned by skill lookup.
#[derive(Clone)]
pub struct SkillFunction {
    metadata: FunctionMetadata,
    executor: Arc<dyn NativeFunction>,
}

impl SkillFunction {
    pub(crate) fn new(metadata: FunctionMetadata, executor: Arc<dyn NativeFunction>) -> Self {
        Self { metadata, executor }
    }

    /// Returns the metadata advertised for this function.
    #[must_use]
    pub fn metadata(&self) -> &FunctionMetadata {
        &self.metadata
    }

    /// Executes the underlying function body.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the function implementation.
    pub async fn invoke(&self, ctx: ContextVariables) -> Result<String> {
        debug!(function = %self.metadata.name(), "invoking native function");
        self.executor.invoke(ctx).await
    }
}

impl std::fmt::Debug for SkillFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillFunction")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
