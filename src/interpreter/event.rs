//! # Event Assembler
//!
//! Builds per-event records for the target state: identifier, date, the four
//! classification flags, and violation membership.

use serde::Serialize;

use crate::interpreter::{
    relation, skolem::AtomIdentifierMap, violations, ARTIFACT_PREFIX, ASSAULTIVE_SET,
    ELIGIBILITY_SET, EVENT_DATE_RELATION, OWI_SET, TEN_YEAR_FELONY_SET,
};

/// One legal event as reported to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// User-facing identifier from the predicate's skolem binding, empty
    /// when no binding covers the atom.
    pub id: String,
    /// The event atom name.
    pub event: String,
    /// Date the event occurred.
    pub date: String,
    /// Operating-while-intoxicated offense.
    pub owi: bool,
    /// Felony carrying a ten-year maximum.
    pub tenner: bool,
    /// Assaultive crime.
    pub assaultive: bool,
    /// Already expunged in this state.
    pub expunged: bool,
    /// Violation categories the event breaches, in vocabulary order.
    pub violations: Vec<String>,
}

/// Assemble event records from one state block.
///
/// Sources are the event→date relation's tuples in parsed order. Atoms named
/// with the expungement-artifact prefix are model bookkeeping, not events,
/// and are skipped. Classification flags are independent membership tests;
/// an absent classification relation reads as `false` for every atom.
pub fn assemble_events(block: &str, identifiers: &AtomIdentifierMap) -> Vec<EventRecord> {
    relation::pairs(block, EVENT_DATE_RELATION)
        .into_iter()
        .filter(|(event, _)| !event.starts_with(ARTIFACT_PREFIX))
        .map(|(event, date)| EventRecord {
            id: identifiers.label_for(&event).to_string(),
            owi: relation::is_member(block, OWI_SET, &event),
            tenner: relation::is_member(block, TEN_YEAR_FELONY_SET, &event),
            assaultive: relation::is_member(block, ASSAULTIVE_SET, &event),
            expunged: relation::is_member(block, ELIGIBILITY_SET, &event),
            violations: violations::categories_for(block, &event),
            event,
            date,
        })
        .collect()
}
