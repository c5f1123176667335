//! # Violation Collector
//!
//! Six fixed rule clauses mark events that breach them, each as a unary
//! relation in the dump. An event may belong to any subset of the six; the
//! per-event list always follows the vocabulary's declaration order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::interpreter::relation;
use crate::interpreter::segmenter::StateBlock;
use crate::interpreter::EVENT_DATE_RELATION;

/// The fixed violation-category vocabulary, in declaration order.
pub const VIOLATION_CATEGORIES: [&str; 6] = [
    "sec1_1bViolations",
    "sec1_1cViolations",
    "sec1d_2Violations",
    "sec1dTimingViolations",
    "backwardWaitingViolations",
    "forwardWaitingViolations",
];

/// One dated violation occurrence in the grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationEntry {
    pub event: String,
    pub date: String,
}

/// Grouped report: category → dated occurrences, across states.
pub type GroupedViolations = BTreeMap<String, Vec<ViolationEntry>>;

fn qualified(category: &str) -> String {
    format!("this/{}", category)
}

/// Violation categories the atom belongs to in this block, in declaration
/// order. Absent category relations contribute nothing.
pub fn categories_for(block: &str, atom: &str) -> Vec<String> {
    VIOLATION_CATEGORIES
        .iter()
        .filter(|category| relation::is_member(block, &qualified(category), atom))
        .map(|category| category.to_string())
        .collect()
}

/// Per-state category membership paired with known dates, for one block.
///
/// Atoms without an entry in the block's event→date relation are omitted:
/// a violation without a known date is not actionable output.
pub fn dated_violations(block: &StateBlock<'_>) -> BTreeMap<String, Vec<ViolationEntry>> {
    let dates: BTreeMap<String, String> = relation::pairs(block.body, EVENT_DATE_RELATION)
        .into_iter()
        .collect();

    let mut by_category = BTreeMap::new();
    for category in VIOLATION_CATEGORIES {
        let members = relation::atoms(block.body, &qualified(category));
        if members.is_empty() {
            continue;
        }
        let entries: Vec<ViolationEntry> = members
            .into_iter()
            .filter_map(|event| {
                dates.get(&event).map(|date| ViolationEntry {
                    date: date.clone(),
                    event,
                })
            })
            .collect();
        by_category.insert(category.to_string(), entries);
    }
    by_category
}

/// Merge per-state violation reports across all states into one grouped
/// structure. Identical (event, date) occurrences repeating across states
/// collapse to a single entry.
pub fn collect_grouped(states: &[StateBlock<'_>]) -> GroupedViolations {
    let mut grouped = GroupedViolations::new();
    for block in states {
        for (category, entries) in dated_violations(block) {
            let merged = grouped.entry(category).or_insert_with(Vec::new);
            for entry in entries {
                if !merged.contains(&entry) {
                    merged.push(entry);
                }
            }
        }
    }
    grouped
}
