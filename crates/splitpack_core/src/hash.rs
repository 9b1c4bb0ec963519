use xxhash_rust::xxh3::xxh3_64;

/// Splitpack needs stable hashes for identifiers that end up in generated
/// chunk names.
///
/// The hashes don't need to be incredibly fast, but they must be stable across
/// runs, machines, platforms and versions, since they are written into output
/// file names that downstream caches key on.
pub fn hash_bytes(bytes: &[u8]) -> String {
  let res = xxh3_64(bytes);
  format!("{:016x}", res)
}

/// Short identifier hash used in generated bucket names, e.g.
/// `common-chunk-<hash>`.
///
/// Only name stability across builds depends on this, never correctness.
pub fn hash_id8(id: &str) -> String {
  let mut hash = hash_bytes(id.as_bytes());
  hash.truncate(8);
  hash
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn hash_id8_is_eight_hex_characters() {
    let hash = hash_id8("/src/shared/util.js");

    assert_eq!(hash.len(), 8);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
  }

  #[test]
  fn hash_id8_is_stable() {
    assert_eq!(hash_id8("/src/a.js"), hash_id8("/src/a.js"));
    assert_ne!(hash_id8("/src/a.js"), hash_id8("/src/b.js"));
  }

  #[test]
  fn hash_bytes_is_sixteen_hex_characters() {
    assert_eq!(hash_bytes(b"entry.js").len(), 16);
  }
}
