use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Per-module record the host exposes during chunk planning.
///
/// `importers` is a `BTreeSet` so reference counting walks the import graph in
/// a reproducible order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
  pub id: String,

  /// Generated code for this module. Sizes are measured as UTF-8 byte length.
  #[serde(default)]
  pub code: String,

  /// Ids of the modules that directly import this one.
  #[serde(default)]
  pub importers: BTreeSet<String>,

  #[serde(default)]
  pub is_entry: bool,
}

/// Classification of a materialized chunk.
///
/// Only vendor and common chunks are subject to size enforcement; normal
/// chunks belong to the host and are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChunkKind {
  #[default]
  Normal,
  Vendor,
  Common,
}

impl ChunkKind {
  /// Classifies a chunk by the name markers the planner emits
  /// (`vendor-<package>`, `common-chunk-<hash>`).
  pub fn from_chunk_name(name: &str) -> ChunkKind {
    if name.contains("vendor") {
      ChunkKind::Vendor
    } else if name.contains("common-chunk") {
      ChunkKind::Common
    } else {
      ChunkKind::Normal
    }
  }

  pub fn is_enforced(&self) -> bool {
    matches!(self, ChunkKind::Vendor | ChunkKind::Common)
  }
}

/// One unit of bundled output code.
///
/// `modules` maps module id to that module's generated code; iteration order
/// is insertion order, and chunk code is always the `\n`-join of member code
/// in that order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
  pub file_name: String,

  #[serde(default)]
  pub code: String,

  #[serde(default)]
  pub modules: IndexMap<String, String>,

  #[serde(default)]
  pub is_entry: bool,

  #[serde(default)]
  pub kind: ChunkKind,
}

impl Chunk {
  pub fn byte_size(&self) -> u64 {
    self.code.len() as u64
  }

  /// Regenerates `code` from the module map, in mapping order.
  pub fn regenerate_code(&mut self) {
    self.code = self
      .modules
      .values()
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join("\n");
  }
}

/// The materialized bundle, keyed by output file name.
pub type Bundle = IndexMap<String, Chunk>;

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn chunk_kind_from_chunk_name() {
    assert_eq!(
      ChunkKind::from_chunk_name("vendor-lodash.js"),
      ChunkKind::Vendor
    );
    assert_eq!(
      ChunkKind::from_chunk_name("common-chunk-0a1b2c3d.js"),
      ChunkKind::Common
    );
    assert_eq!(ChunkKind::from_chunk_name("index.js"), ChunkKind::Normal);
  }

  #[test]
  fn regenerate_code_joins_modules_in_mapping_order() {
    let mut chunk = Chunk {
      file_name: "common-chunk-0a1b2c3d.js".into(),
      ..Chunk::default()
    };
    chunk.modules.insert("/src/b.js".into(), "const b = 2;".into());
    chunk.modules.insert("/src/a.js".into(), "const a = 1;".into());

    chunk.regenerate_code();

    assert_eq!(chunk.code, "const b = 2;\nconst a = 1;");
    assert_eq!(chunk.byte_size(), chunk.code.len() as u64);
  }

  #[test]
  fn chunk_deserializes_from_camel_case_json() {
    let chunk: Chunk = serde_json::from_str(
      r#"{
        "fileName": "vendor-react.js",
        "code": "react",
        "isEntry": false,
        "kind": "vendor"
      }"#,
    )
    .unwrap();

    assert_eq!(chunk.file_name, "vendor-react.js");
    assert_eq!(chunk.kind, ChunkKind::Vendor);
    assert!(chunk.modules.is_empty());
  }
}
