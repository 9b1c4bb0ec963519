use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Configuration for the split-chunks pipeline, passed in by the host either
/// programmatically or as JSON.
///
/// All three values must be positive, and `max_size` must not be below
/// `min_size`; no valid partition can generally exist otherwise.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksOptions {
  /// Chunks below this byte size are merged into the entry chunk.
  pub min_size: u64,

  /// Chunks above this byte size are split.
  pub max_size: u64,

  /// Minimum number of entry-reachable import chains before a module is
  /// pre-assigned to a common bucket.
  pub min_chunks: u64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SplitChunksOptionsError {
  #[error("maxSize ({max_size}) must not be below minSize ({min_size})")]
  MaxBelowMin { min_size: u64, max_size: u64 },

  #[error("minSize and maxSize must be positive")]
  ZeroSize,

  #[error("minChunks must be at least 1")]
  ZeroMinChunks,
}

impl SplitChunksOptions {
  pub fn validate(&self) -> Result<(), SplitChunksOptionsError> {
    if self.max_size < self.min_size {
      return Err(SplitChunksOptionsError::MaxBelowMin {
        min_size: self.min_size,
        max_size: self.max_size,
      });
    }

    if self.min_size == 0 || self.max_size == 0 {
      return Err(SplitChunksOptionsError::ZeroSize);
    }

    if self.min_chunks == 0 {
      return Err(SplitChunksOptionsError::ZeroMinChunks);
    }

    Ok(())
  }
}
