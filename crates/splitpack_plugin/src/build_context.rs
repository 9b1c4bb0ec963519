use std::collections::HashMap;

/// Memoization state for one module in the reference counter.
///
/// `Visiting` is inserted before recursing into a module's importers; a module
/// revisited while still `Visiting` sits on an import cycle and contributes
/// zero, so the recursion always terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReferenceCacheEntry {
  Visiting,
  Counted(u64),
}

/// Per-build ledgers for the planning phase.
///
/// One instance lives for exactly one build: the pipeline resets it at build
/// start, and no state crosses builds. If the host aborts mid-build, partial
/// ledger state is discarded by the next reset.
#[derive(Debug, Default)]
pub struct BuildContext {
  size_ledger: HashMap<String, u64>,
  reference_counts: HashMap<String, u64>,
  pub(crate) reference_cache: HashMap<String, ReferenceCacheEntry>,
}

impl BuildContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset(&mut self) {
    self.size_ledger.clear();
    self.reference_counts.clear();
    self.reference_cache.clear();
  }

  /// Records a module's generated-code byte size. Overwrites any previous
  /// value for the id.
  pub fn record_size(&mut self, id: &str, bytes: u64) {
    self.size_ledger.insert(id.to_string(), bytes);
  }

  /// Recorded size for a module; an unrecorded module counts as zero bytes.
  pub fn recorded_size(&self, id: &str) -> u64 {
    self.size_ledger.get(id).copied().unwrap_or(0)
  }

  pub fn record_reference_count(&mut self, id: &str, count: u64) {
    self.reference_counts.insert(id.to_string(), count);
  }

  pub fn recorded_reference_count(&self, id: &str) -> Option<u64> {
    self.reference_counts.get(id).copied()
  }
}
