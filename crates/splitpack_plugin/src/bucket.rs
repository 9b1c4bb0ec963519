use splitpack_core::hash::hash_id8;
use splitpack_core::module_graph::ModuleGraph;
use splitpack_core::options::SplitChunksOptions;

use crate::build_context::BuildContext;
use crate::reference_count::reference_count;

/// Path segment marking vendored dependencies.
const VENDOR_DIRECTORY: &str = "node_modules/";

/// Planning decision for one module, invoked once per module before chunk
/// materialization.
///
/// Returns the bucket name the module should be pre-assigned to, or `None` to
/// defer to the host's default chunk assignment. As a side effect the
/// module's size and reference count are recorded into the build ledgers for
/// the later enforcement pass.
pub fn plan_module<G: ModuleGraph + ?Sized>(
  context: &mut BuildContext,
  graph: &G,
  id: &str,
  options: &SplitChunksOptions,
) -> Option<String> {
  let info = graph.module_info(id)?;

  context.record_size(id, info.code.len() as u64);

  let count = reference_count(context, graph, id);
  context.record_reference_count(id, count);

  if let Some(package) = vendor_package(id) {
    let bucket = format!("vendor-{package}");
    tracing::debug!(module_id = id, bucket = %bucket, "assigned vendor bucket");
    return Some(bucket);
  }

  if count >= options.min_chunks {
    let bucket = format!("common-chunk-{}", hash_id8(id));
    tracing::debug!(
      module_id = id,
      bucket = %bucket,
      reference_count = count,
      "assigned common bucket"
    );
    return Some(bucket);
  }

  None
}

/// Package name for a vendored module id: the path segment immediately after
/// the first vendor directory marker.
fn vendor_package(id: &str) -> Option<&str> {
  let (_, rest) = id.split_once(VENDOR_DIRECTORY)?;
  let package = rest.split('/').next()?;

  if package.is_empty() {
    return None;
  }

  Some(package)
}
