//! Longest-prefix abbreviation lookup.
//!
//! Every registry in the query engine (fields, operators, sort directions)
//! is a small table of abbreviation strings. A token resolves to the entry
//! whose abbreviation is the longest prefix of the token, so `"equ"` finds
//! `"eq"` and `"names"` finds `"name"`.
//!
//! Tables must be prefix-unambiguous: no abbreviation may be a prefix of
//! another abbreviation that maps to a different identifier. This is a
//! property of the registered data, checked by [`PrefixLookup::collisions`]
//! in each registry's tests.

use crate::error::QueryError;

/// Sorted abbreviation table resolving tokens by longest registered prefix.
#[derive(Debug, Clone)]
pub struct PrefixLookup<T: Copy> {
    entries: Vec<(&'static str, T)>,
}

impl<T: Copy + PartialEq> PrefixLookup<T> {
    /// Build a lookup from `(abbreviation, identifier)` pairs.
    #[must_use]
    pub fn new(pairs: &[(&'static str, T)]) -> Self {
        let mut entries = pairs.to_vec();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        // Repeated keys survive unless they also repeat the identifier, so
        // `collisions` can report a key claimed twice.
        entries.dedup_by(|(a, a_id), (b, b_id)| a == b && a_id == b_id);
        Self { entries }
    }

    /// Resolve `token` to its identifier.
    ///
    /// Matching is case-sensitive; callers lower-case free text first.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] when the token is absent, empty, or
    /// has no registered prefix.
    pub fn find<'a>(&self, token: impl Into<Option<&'a str>>) -> Result<T, QueryError> {
        let token = token.into().unwrap_or_default();
        if token.is_empty() {
            return Err(QueryError::NotFound(token.to_string()));
        }

        // Walk candidate prefixes from longest to shortest; the first hit is
        // the longest registered prefix.
        let mut ends: Vec<usize> = token
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        ends.reverse();

        ends.into_iter()
            .find_map(|end| self.exact(&token[..end]))
            .ok_or_else(|| QueryError::NotFound(token.to_string()))
    }

    fn exact(&self, abbreviation: &str) -> Option<T> {
        self.entries
            .binary_search_by(|(key, _)| (*key).cmp(abbreviation))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Pairs of abbreviations where one is a prefix of (or equal to) the
    /// other but they map to different identifiers. Empty for a well-formed
    /// table.
    #[must_use]
    pub fn collisions(&self) -> Vec<(&'static str, &'static str)> {
        let mut found = Vec::new();
        for (i, (short, short_id)) in self.entries.iter().enumerate() {
            for (j, (long, long_id)) in self.entries.iter().enumerate() {
                // Equal keys sit next to each other; report each pair once.
                let distinct = short != long || i < j;
                if i != j && distinct && long.starts_with(short) && short_id != long_id {
                    found.push((*short, *long));
                }
            }
        }
        found
    }

    /// Registered abbreviations in sorted order.
    pub fn abbreviations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Rose,
        Blue,
    }

    fn table() -> PrefixLookup<Color> {
        PrefixLookup::new(&[
            ("r", Color::Red),
            ("red", Color::Red),
            ("ro", Color::Rose),
            ("rose", Color::Rose),
            ("b", Color::Blue),
        ])
    }

    #[test]
    fn test_longest_prefix_wins() {
        let lookup = table();
        assert_eq!(lookup.find("rosewood"), Ok(Color::Rose));
        assert_eq!(lookup.find("ro"), Ok(Color::Rose));
        assert_eq!(lookup.find("rd"), Ok(Color::Red));
        assert_eq!(lookup.find("blue"), Ok(Color::Blue));
    }

    #[test]
    fn test_empty_and_absent_fail() {
        let lookup = table();
        assert_eq!(lookup.find(""), Err(QueryError::NotFound(String::new())));
        assert_eq!(lookup.find(None::<&str>), Err(QueryError::NotFound(String::new())));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(table().find("Red").is_err());
    }

    #[test]
    fn test_multibyte_tokens_do_not_panic() {
        assert!(table().find("ärger").is_err());
        assert_eq!(table().find("r€"), Ok(Color::Red));
    }

    #[test]
    fn test_collisions_reported() {
        // "r" (Red) is a prefix of "ro" and "rose" (Rose).
        let collisions = table().collisions();
        assert!(collisions.contains(&("r", "ro")));
        assert!(collisions.contains(&("r", "rose")));
        assert!(!collisions.contains(&("r", "red")));
    }

    #[test]
    fn test_key_registered_twice_is_a_collision() {
        let lookup = PrefixLookup::new(&[
            ("s", Color::Red),
            ("size", Color::Red),
            ("s", Color::Blue),
        ]);
        let collisions = lookup.collisions();
        assert!(collisions.contains(&("s", "s")), "{collisions:?}");
        assert!(collisions.contains(&("s", "size")), "{collisions:?}");
    }

    #[test]
    fn test_identical_registrations_collapse() {
        let lookup = PrefixLookup::new(&[("b", Color::Blue), ("b", Color::Blue)]);
        assert_eq!(lookup.abbreviations().count(), 1);
        assert!(lookup.collisions().is_empty());
    }
}
