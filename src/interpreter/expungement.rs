//! # Expungement Aggregator
//!
//! The final decision lives in the last state: which events the model
//! certifies as expunged, keyed to the date each event occurred.

use std::collections::BTreeMap;

use crate::interpreter::{relation, ELIGIBILITY_SET, EVENT_DATE_RELATION};

/// Map each eligible event in the last state to its date.
///
/// Only atoms present in both the eligibility set and the event→date
/// relation are emitted. Eligibility without a known date is not actionable
/// output, so such atoms are dropped silently rather than reported.
pub fn aggregate(last_block: &str) -> BTreeMap<String, String> {
    let dates: BTreeMap<String, String> = relation::pairs(last_block, EVENT_DATE_RELATION)
        .into_iter()
        .collect();

    relation::atoms(last_block, ELIGIBILITY_SET)
        .into_iter()
        .filter_map(|event| dates.get(&event).map(|date| (event, date.clone())))
        .collect()
}
