use std::collections::HashMap;

use splitpack_core::module_graph::ModuleGraph;
use splitpack_core::types::ModuleInfo;

/// In-memory module graph for tests.
#[derive(Debug, Default)]
pub(crate) struct TestModuleGraph {
  modules: HashMap<String, ModuleInfo>,
}

impl TestModuleGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(self, id: &str, importers: &[&str]) -> Self {
    self.insert(id, "", importers, true)
  }

  pub fn with_module(self, id: &str, importers: &[&str]) -> Self {
    self.insert(id, "", importers, false)
  }

  pub fn with_module_code(self, id: &str, code: &str, importers: &[&str]) -> Self {
    self.insert(id, code, importers, false)
  }

  fn insert(mut self, id: &str, code: &str, importers: &[&str], is_entry: bool) -> Self {
    self.modules.insert(
      id.to_string(),
      ModuleInfo {
        id: id.to_string(),
        code: code.to_string(),
        importers: importers.iter().map(|importer| importer.to_string()).collect(),
        is_entry,
      },
    );
    self
  }
}

impl ModuleGraph for TestModuleGraph {
  fn module_info(&self, id: &str) -> Option<&ModuleInfo> {
    self.modules.get(id)
  }
}
