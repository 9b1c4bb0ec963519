use indexmap::IndexMap;
use splitpack_core::options::SplitChunksOptions;
use splitpack_core::request::is_style_request;
use splitpack_core::size::SizeVector;
use splitpack_core::size::SCRIPT_DIMENSION;
use splitpack_core::types::Bundle;
use splitpack_core::types::Chunk;
use splitpack_grouping::group_items;

use crate::build_context::BuildContext;

/// Single post-materialization pass rewriting the bundle so no vendor or
/// common chunk violates the configured size constraints.
///
/// Undersized chunks are merged into the entry chunk; oversized chunks are
/// split by deterministic grouping. Merge and split are mutually exclusive
/// per chunk per pass, with merge taking precedence, so the split branch can
/// never run against a chunk the merge branch already deleted. Normal chunks
/// and style-request chunks belong to the host and are left untouched.
pub fn enforce(context: &BuildContext, bundle: &mut Bundle, options: &SplitChunksOptions) {
  let min_size = SizeVector::of(SCRIPT_DIMENSION, options.min_size);
  let max_size = SizeVector::of(SCRIPT_DIMENSION, options.max_size);

  // Snapshot the file names up front: the loop body inserts and removes
  // chunks, and newly synthesized parts must not be revisited.
  let file_names: Vec<String> = bundle.keys().cloned().collect();

  for file_name in file_names {
    let Some(chunk) = bundle.get(&file_name) else {
      continue;
    };

    if !chunk.kind.is_enforced() || is_style_request(&chunk.file_name) {
      continue;
    }

    let chunk_size = chunk.byte_size();

    if chunk_size < options.min_size {
      merge_into_entry(bundle, &file_name);
      continue;
    }

    if chunk_size > options.max_size {
      split_chunk(context, bundle, &file_name, &min_size, &max_size);
    }
  }
}

/// Appends an undersized chunk's modules to the entry chunk, regenerates the
/// entry chunk's code and deletes the source chunk.
///
/// Without an entry chunk the merge is a silent no-op and the source chunk is
/// retained.
fn merge_into_entry(bundle: &mut Bundle, file_name: &str) {
  let Some(entry_file_name) = bundle
    .values()
    .find(|chunk| chunk.is_entry)
    .map(|chunk| chunk.file_name.clone())
  else {
    tracing::debug!(chunk = file_name, "no entry chunk to merge into, chunk retained");
    return;
  };

  if entry_file_name == file_name {
    return;
  }

  let Some(source) = bundle.shift_remove(file_name) else {
    return;
  };
  let Some(entry) = bundle.get_mut(&entry_file_name) else {
    return;
  };

  tracing::debug!(
    chunk = file_name,
    entry = %entry_file_name,
    modules = source.modules.len(),
    "merged undersized chunk into entry"
  );

  entry.modules.extend(source.modules);
  entry.regenerate_code();
}

/// Redistributes an oversized chunk's modules into `<base>-part<N><ext>`
/// chunks via deterministic grouping and removes the original.
///
/// Node sizes come from the size ledger; parts whose code is empty are
/// dropped rather than emitted, though they still consume a part index.
fn split_chunk(
  context: &BuildContext,
  bundle: &mut Bundle,
  file_name: &str,
  min_size: &SizeVector,
  max_size: &SizeVector,
) {
  let Some(chunk) = bundle.shift_remove(file_name) else {
    return;
  };

  let kind = chunk.kind;
  let items: Vec<(String, String)> = chunk.modules.into_iter().collect();

  let groups = group_items(
    items,
    |(id, _)| id.clone(),
    |(id, _)| SizeVector::of(SCRIPT_DIMENSION, context.recorded_size(id)),
    min_size,
    max_size,
  );

  tracing::debug!(chunk = file_name, parts = groups.len(), "split oversized chunk");

  for (index, group) in groups.into_iter().enumerate() {
    let mut modules: IndexMap<String, String> = IndexMap::new();
    for (id, code) in group.items {
      modules.insert(id, code);
    }

    let mut part = Chunk {
      file_name: part_file_name(file_name, index),
      code: String::new(),
      modules,
      is_entry: false,
      kind,
    };
    part.regenerate_code();

    if part.byte_size() == 0 {
      tracing::debug!(part = %part.file_name, "dropped empty split part");
      continue;
    }

    bundle.insert(part.file_name.clone(), part);
  }
}

fn part_file_name(file_name: &str, index: usize) -> String {
  match file_name.rsplit_once('.') {
    Some((base, extension)) => format!("{base}-part{index}.{extension}"),
    None => format!("{file_name}-part{index}.js"),
  }
}
