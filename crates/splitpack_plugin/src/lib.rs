//! Host-facing split-chunks pipeline.
//!
//! The host build drives two phases in order: a planning phase, calling
//! [`SplitChunksPlugin::on_plan_module`] once per module before chunk
//! materialization, and a single post-materialization call to
//! [`SplitChunksPlugin::on_bundle_ready`]. Everything is synchronous and
//! single-threaded; the per-build ledgers are reset by
//! [`SplitChunksPlugin::on_build_start`] and carry no state across builds.

pub mod bucket;
pub mod build_context;
pub mod enforce;
pub mod reference_count;

#[cfg(test)]
mod testing;

use splitpack_core::module_graph::ModuleGraph;
use splitpack_core::options::SplitChunksOptions;
use splitpack_core::types::Bundle;

use crate::bucket::plan_module;
use crate::build_context::BuildContext;
use crate::enforce::enforce;

/// The split-chunks pipeline: bucket planning plus chunk-size enforcement.
#[derive(Debug)]
pub struct SplitChunksPlugin {
  options: SplitChunksOptions,
  context: BuildContext,
}

impl SplitChunksPlugin {
  /// Validates the configuration up front; an invalid configuration is a
  /// hard failure that must halt the build.
  pub fn new(options: SplitChunksOptions) -> anyhow::Result<Self> {
    options.validate()?;

    Ok(SplitChunksPlugin {
      options,
      context: BuildContext::new(),
    })
  }

  /// Resets the per-build ledgers. Must be called at the start of every
  /// build.
  #[tracing::instrument(level = "debug", skip_all)]
  pub fn on_build_start(&mut self) {
    self.context.reset();
  }

  /// Planning decision for one module: the bucket name it should be
  /// pre-assigned to, or `None` to defer to the host's default assignment.
  #[tracing::instrument(level = "debug", skip_all, fields(module_id = %id))]
  pub fn on_plan_module<G: ModuleGraph + ?Sized>(
    &mut self,
    graph: &G,
    id: &str,
  ) -> Option<String> {
    plan_module(&mut self.context, graph, id, &self.options)
  }

  /// Rewrites the materialized bundle so no vendor or common chunk violates
  /// the configured size constraints.
  #[tracing::instrument(level = "debug", skip_all, fields(chunks = bundle.len()))]
  pub fn on_bundle_ready(&mut self, bundle: &mut Bundle) -> anyhow::Result<()> {
    enforce(&self.context, bundle, &self.options);

    Ok(())
  }
}
