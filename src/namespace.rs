//! Key namespacing
//!
//! Every application key lives under a category and reaches the store as
//! `"<category>:<key>"`.

use crate::error::{CacheError, Result};

/// Separator between category and key in a namespaced key.
pub const DELIMITER: char = ':';

/// Checks that a category yields an unambiguous prefix.
///
/// Keys may contain the delimiter; categories may not, otherwise `a:b` + `c` and
/// `a` + `b:c` would address the same store entry.
pub fn validate_category(category: &str) -> Result<()> {
    if category.is_empty() || category.contains(DELIMITER) {
        return Err(CacheError::InvalidCategory(category.to_string()));
    }
    Ok(())
}

/// Builds the store key for `key` inside `category`.
pub fn build_key(category: &str, key: &str) -> Result<String> {
    validate_category(category)?;

    let mut namespaced = String::with_capacity(category.len() + 1 + key.len());
    namespaced.push_str(category);
    namespaced.push(DELIMITER);
    namespaced.push_str(key);
    Ok(namespaced)
}

/// Removes the `category:` prefix from a namespaced key.
///
/// Keys that do not carry the prefix are returned unchanged.
pub fn strip_key(namespaced: &str, category: &str) -> String {
    namespaced
        .strip_prefix(category)
        .and_then(|rest| rest.strip_prefix(DELIMITER))
        .unwrap_or(namespaced)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_key() {
        assert_eq!(build_key("users", "1").unwrap(), "users:1");
        assert_eq!(build_key("users", "").unwrap(), "users:");
        assert_eq!(build_key("users", "a:b").unwrap(), "users:a:b");
    }

    #[test]
    fn test_build_key_rejects_bad_categories() {
        assert!(matches!(
            build_key("", "1"),
            Err(CacheError::InvalidCategory(_))
        ));
        assert!(matches!(
            build_key("users:admin", "1"),
            Err(CacheError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_strip_key_only_at_start() {
        assert_eq!(strip_key("users:1", "users"), "1");
        assert_eq!(strip_key("users:users:1", "users"), "users:1");
        assert_eq!(strip_key("groups:users:1", "users"), "groups:users:1");
        assert_eq!(strip_key("usersx1", "users"), "usersx1");
    }

    proptest! {
        #[test]
        fn prop_build_strip_inverse(
            category in "[a-zA-Z0-9_.-]{1,16}",
            key in "[^\\x00]{0,48}"
        ) {
            let namespaced = build_key(&category, &key).unwrap();
            prop_assert_eq!(strip_key(&namespaced, &category), key);
        }

        #[test]
        fn prop_distinct_pairs_never_collide(
            c1 in "[a-z]{1,6}", k1 in "[a-z:]{0,6}",
            c2 in "[a-z]{1,6}", k2 in "[a-z:]{0,6}"
        ) {
            prop_assume!((&c1, &k1) != (&c2, &k2));
            prop_assert_ne!(build_key(&c1, &k1).unwrap(), build_key(&c2, &k2).unwrap());
        }
    }
}
