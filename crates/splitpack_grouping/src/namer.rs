use std::collections::HashSet;

/// Derives a short, stable name for a finalized group from its first and last
/// member keys.
///
/// Takes the prefix of the first key up to one character past the point where
/// the two keys diverge, then extends it until the lowercased form is unused.
/// When every candidate prefix is taken the first key is returned in full, so
/// names stay case-insensitively unique within one `used_names` set.
pub(crate) fn assign_name(a: &str, b: &str, used_names: &mut HashSet<String>) -> String {
  let a_chars: Vec<char> = a.chars().collect();
  let b_chars: Vec<char> = b.chars().collect();
  let shared_len = a_chars.len().min(b_chars.len());

  let mut i = 0;
  while i < shared_len {
    if a_chars[i] != b_chars[i] {
      i += 1;
      break;
    }
    i += 1;
  }

  while i < shared_len {
    let name: String = a_chars[..i].iter().collect();
    if used_names.insert(name.to_lowercase()) {
      return name;
    }
    i += 1;
  }

  a.to_string()
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn takes_prefix_one_past_divergence() {
    let mut used = HashSet::new();

    assert_eq!(assign_name("src/alpha", "src/beta", &mut used), "src/a");
  }

  #[test]
  fn extends_prefix_when_name_is_taken() {
    let mut used = HashSet::new();
    used.insert("src/a".to_string());

    assert_eq!(assign_name("src/alpha", "src/beta", &mut used), "src/al");
  }

  #[test]
  fn uniqueness_is_case_insensitive() {
    let mut used = HashSet::new();
    used.insert("src/a".to_string());

    assert_eq!(assign_name("src/Alpha", "src/beta", &mut used), "src/Al");
    assert!(used.contains("src/al"));
  }

  #[test]
  fn falls_back_to_full_first_key() {
    let mut used = HashSet::new();

    // Identical keys never reach a divergence point.
    assert_eq!(assign_name("src/a", "src/a", &mut used), "src/a");

    // All candidate prefixes already claimed.
    used.insert("src/al".to_string());
    used.insert("src/alp".to_string());
    used.insert("src/alph".to_string());
    assert_eq!(
      assign_name("src/alpha", "src/azzzz", &mut used),
      "src/alpha"
    );
  }
}
