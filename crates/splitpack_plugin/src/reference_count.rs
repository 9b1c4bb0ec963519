use splitpack_core::module_graph::ModuleGraph;

use crate::build_context::BuildContext;
use crate::build_context::ReferenceCacheEntry;

/// Number of distinct entry-reachable import chains that reach `id`, memoized
/// in the build context for the lifetime of one build.
///
/// An entry module counts as one chain. Any other module sums the counts of
/// its direct importers, skipping importers the cache already settled. The
/// result approximates how many independent access paths exist, which the
/// planner uses as a proxy for "shared enough to deserve its own chunk".
///
/// A module revisited while its own count is still being computed sits on an
/// import cycle and contributes zero.
pub fn reference_count<G: ModuleGraph + ?Sized>(
  context: &mut BuildContext,
  graph: &G,
  id: &str,
) -> u64 {
  match context.reference_cache.get(id) {
    Some(ReferenceCacheEntry::Counted(count)) => return *count,
    Some(ReferenceCacheEntry::Visiting) => return 0,
    None => {}
  }

  let Some(info) = graph.module_info(id) else {
    context
      .reference_cache
      .insert(id.to_string(), ReferenceCacheEntry::Counted(0));
    return 0;
  };

  if info.is_entry {
    context
      .reference_cache
      .insert(id.to_string(), ReferenceCacheEntry::Counted(1));
    return 1;
  }

  context
    .reference_cache
    .insert(id.to_string(), ReferenceCacheEntry::Visiting);

  let mut count = 0;
  for importer in &info.importers {
    if !context.reference_cache.contains_key(importer) {
      count += reference_count(context, graph, importer);
    }
  }

  context
    .reference_cache
    .insert(id.to_string(), ReferenceCacheEntry::Counted(count));

  count
}
