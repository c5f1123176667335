//! # Skolem Predicate Mapper
//!
//! The user predicate introduces existential witnesses that the solver
//! reports as skolem bindings, one per instantiation:
//!
//! ```text
//! skolem $userDefinedPredicate_e1={Event$0}
//! ```
//!
//! Stripping the predicate prefix leaves the user-facing label (`e1`), and
//! every atom enumerated in the binding's value set maps to that label.
//! Bindings are declared once for the whole solution, not per state.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::template::PREDICATE_NAME;

/// Mapping from event atom to the user-facing identifier that witnessed it.
#[derive(Debug, Clone, Default)]
pub struct AtomIdentifierMap {
    labels: HashMap<String, String>,
}

fn binding_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"skolem \${}_(\w+)=\{{([^}}]*)\}}",
            regex::escape(PREDICATE_NAME)
        ))
        .expect("skolem binding pattern")
    })
}

impl AtomIdentifierMap {
    /// Build the merged map from every matching binding in the solution.
    ///
    /// Multiple bindings contribute to one map; on an atom collision the
    /// later binding wins, matching the dump's declaration order.
    pub fn from_solution(solution: &str) -> Self {
        let mut labels = HashMap::new();
        for capture in binding_pattern().captures_iter(solution) {
            let label = &capture[1];
            for atom in capture[2].split(',') {
                let atom = atom.trim();
                if !atom.is_empty() {
                    labels.insert(atom.to_string(), label.to_string());
                }
            }
        }
        Self { labels }
    }

    /// Label for an atom, or the empty string when no binding covers it.
    ///
    /// Atoms outside every binding are expected, so this is a total lookup.
    pub fn label_for(&self, atom: &str) -> &str {
        self.labels.get(atom).map(String::as_str).unwrap_or("")
    }

    /// Number of atoms covered by some binding.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no binding was found at all.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
