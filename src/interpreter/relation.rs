//! # Relation Extractor
//!
//! Pulls a single named relation's tuple set out of one state block.
//!
//! Relations print as `name={elem, elem, ...}`. An absent relation name is a
//! legitimate empty set, never an error; the model simply has no members for
//! it in that state. Only the first occurrence within a block is read.

/// Raw comma-separated elements of `<name>={...}` within one block.
///
/// Empty braces, trailing whitespace, and a missing relation all resolve to
/// an empty vector. Extraction is pure over the block text, so repeated
/// calls yield identical results.
pub fn elements(block: &str, name: &str) -> Vec<String> {
    let needle = format!("{}={{", name);
    let Some(open) = block.find(&needle) else {
        return Vec::new();
    };
    let rest = &block[open + needle.len()..];
    let Some(close) = rest.find('}') else {
        return Vec::new();
    };

    rest[..close]
        .split(',')
        .map(str::trim)
        .filter(|elem| !elem.is_empty())
        .map(str::to_string)
        .collect()
}

/// A unary relation as its ordered atom list.
pub fn atoms(block: &str, name: &str) -> Vec<String> {
    elements(block, name)
}

/// A binary relation as ordered `(source, target)` pairs.
///
/// Elements without the `->` separator are skipped rather than rejected;
/// the dump format is tolerated, not validated.
pub fn pairs(block: &str, name: &str) -> Vec<(String, String)> {
    elements(block, name)
        .iter()
        .filter_map(|elem| {
            elem.split_once("->")
                .map(|(source, target)| (source.trim().to_string(), target.trim().to_string()))
        })
        .collect()
}

/// Unary membership test: is `atom` a member of relation `name`?
///
/// An absent relation yields `false` for every atom.
pub fn is_member(block: &str, name: &str, atom: &str) -> bool {
    elements(block, name).iter().any(|member| member == atom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "\nthis/Event={E1, E2}\nthis/Event<:date={E1->2020-01-01, E2->2021-06-15}\nthis/pastExpunged={}\n";

    #[test]
    fn test_unary_atoms() {
        assert_eq!(atoms(BLOCK, "this/Event"), vec!["E1", "E2"]);
    }

    #[test]
    fn test_absent_relation_is_empty_set() {
        assert!(atoms(BLOCK, "this/OWI").is_empty());
        assert!(pairs(BLOCK, "this/OWI").is_empty());
    }

    #[test]
    fn test_empty_braces_is_empty_set() {
        assert!(atoms(BLOCK, "this/pastExpunged").is_empty());
    }

    #[test]
    fn test_binary_pairs() {
        let rel = pairs(BLOCK, "this/Event<:date");
        assert_eq!(
            rel,
            vec![
                ("E1".to_string(), "2020-01-01".to_string()),
                ("E2".to_string(), "2021-06-15".to_string()),
            ]
        );
    }

    #[test]
    fn test_name_with_binary_suffix_does_not_shadow_base_name() {
        // `this/Event` must not match inside `this/Event<:date`.
        assert_eq!(atoms(BLOCK, "this/Event"), vec!["E1", "E2"]);
    }

    #[test]
    fn test_malformed_pair_skipped() {
        let block = "r={E1->D1, dangling, E2->D2}";
        assert_eq!(pairs(block, "r").len(), 2);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let block = "r={ E1 ,  E2 , }";
        assert_eq!(atoms(block, "r"), vec!["E1", "E2"]);
    }

    #[test]
    fn test_membership() {
        assert!(is_member(BLOCK, "this/Event", "E1"));
        assert!(!is_member(BLOCK, "this/Event", "E9"));
        assert!(!is_member(BLOCK, "this/OWI", "E1"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = elements(BLOCK, "this/Event<:date");
        let second = elements(BLOCK, "this/Event<:date");
        assert_eq!(first, second);
    }
}
