use std::fmt::Debug;

use crate::types::ModuleInfo;

/// Host collaborator supplying per-module metadata during chunk planning.
///
/// The planning phase queries this once per module; an id the graph does not
/// know about makes the planner abstain and defer to the host's default
/// assignment.
pub trait ModuleGraph: Debug {
  fn module_info(&self, id: &str) -> Option<&ModuleInfo>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct TestModuleGraph {}

  impl ModuleGraph for TestModuleGraph {
    fn module_info(&self, _id: &str) -> Option<&ModuleInfo> {
      None
    }
  }

  #[test]
  fn can_be_dyn() {
    let graph: Box<dyn ModuleGraph> = Box::new(TestModuleGraph {});

    assert!(graph.module_info("/src/a.js").is_none());
  }
}
