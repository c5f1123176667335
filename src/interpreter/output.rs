//! # Output Formatter
//!
//! Three output shapes over the same underlying state data:
//!
//! - full per-state dump plus aggregated expungements and grouped violations
//! - flat per-event listing from the last state
//! - minimal eligibility listing, raw set members only
//!
//! All three succeed with empty containers when the dump holds no state
//! blocks; "no solution" is not an error at this layer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::interpreter::{
    event, expungement, relation, segmenter, skolem::AtomIdentifierMap, violations,
    violations::GroupedViolations, EventRecord, ELIGIBILITY_SET, EVENT_DATE_RELATION, EVENT_SET,
    NOW_SET,
};

/// Date buckets reserved for a future model revision; always empty today.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DateAttributes {
    #[serde(rename = "withinFive")]
    pub within_five: Vec<String>,
    #[serde(rename = "withinSix")]
    pub within_six: Vec<String>,
    #[serde(rename = "withinSeven")]
    pub within_seven: Vec<String>,
}

/// One state as reported in the full dump.
#[derive(Debug, Clone, Serialize)]
pub struct StateDump {
    pub state: usize,
    pub now: Vec<String>,
    pub events: Vec<String>,
    pub event_date: BTreeMap<String, String>,
    pub expunged: Vec<String>,
    pub date_attributes: DateAttributes,
    pub violations: BTreeMap<String, Vec<violations::ViolationEntry>>,
}

/// Full per-state dump with top-level aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    pub success: bool,
    pub data: Vec<StateDump>,
    pub expungements: BTreeMap<String, String>,
    pub violations: GroupedViolations,
}

/// Flat per-event listing derived from the last state.
#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub success: bool,
    pub data: Vec<EventRecord>,
}

/// Raw eligibility members of the last state, no date correlation.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub success: bool,
    pub expungements: Vec<String>,
}

/// Build the full per-state dump.
pub fn full_report(solution: &str) -> FullReport {
    let states = segmenter::segment(solution);

    let data: Vec<StateDump> = states
        .iter()
        .map(|block| StateDump {
            state: block.index,
            now: relation::atoms(block.body, NOW_SET),
            events: relation::atoms(block.body, EVENT_SET),
            event_date: relation::pairs(block.body, EVENT_DATE_RELATION)
                .into_iter()
                .collect(),
            expunged: relation::atoms(block.body, ELIGIBILITY_SET),
            date_attributes: DateAttributes::default(),
            violations: violations::dated_violations(block),
        })
        .collect();

    let expungements = states
        .last()
        .map(|block| expungement::aggregate(block.body))
        .unwrap_or_default();

    FullReport {
        success: true,
        data,
        expungements,
        violations: violations::collect_grouped(&states),
    }
}

/// Build the per-event listing from the last state.
pub fn event_report(solution: &str) -> EventReport {
    let identifiers = AtomIdentifierMap::from_solution(solution);
    let data = segmenter::last_state(solution)
        .map(|block| event::assemble_events(block.body, &identifiers))
        .unwrap_or_default();

    EventReport {
        success: true,
        data,
    }
}

/// Build the minimal eligibility listing from the last state.
pub fn eligibility_report(solution: &str) -> EligibilityReport {
    let expungements = segmenter::last_state(solution)
        .map(|block| relation::atoms(block.body, ELIGIBILITY_SET))
        .unwrap_or_default();

    EligibilityReport {
        success: true,
        expungements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "skolem $userDefinedPredicate_a={E1}\n\
        ------State 0-------\n\
        this/now={2020-01-01}\n\
        this/Event={E1, E2}\n\
        this/Event<:date={E1->2020-01-01, E2->2021-06-15}\n\
        this/pastExpunged={}\n\
        ------State 1 (loop)-------\n\
        this/now={2021-06-15}\n\
        this/Event={E1, E2}\n\
        this/Event<:date={E1->2020-01-01, E2->2021-06-15}\n\
        this/pastExpunged={E1}\n\
        this/sec1_1bViolations={E2}\n";

    #[test]
    fn test_full_report_shape() {
        let report = full_report(DUMP);
        assert!(report.success);
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[0].state, 0);
        assert_eq!(report.data[1].now, vec!["2021-06-15"]);
        assert!(report.data[0].date_attributes.within_five.is_empty());
        assert_eq!(report.expungements["E1"], "2020-01-01");
        assert_eq!(report.violations["sec1_1bViolations"].len(), 1);
    }

    #[test]
    fn test_event_report_uses_last_state() {
        let report = event_report(DUMP);
        assert!(report.success);
        let e1 = report.data.iter().find(|e| e.event == "E1").unwrap();
        assert!(e1.expunged);
        assert_eq!(e1.id, "a");
    }

    #[test]
    fn test_eligibility_report_is_raw_set() {
        let report = eligibility_report(DUMP);
        assert_eq!(report.expungements, vec!["E1"]);
    }

    #[test]
    fn test_all_modes_succeed_on_empty_input() {
        let full = full_report("");
        assert!(full.success && full.data.is_empty() && full.expungements.is_empty());

        let events = event_report("");
        assert!(events.success && events.data.is_empty());

        let minimal = eligibility_report("");
        assert!(minimal.success && minimal.expungements.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(full_report(DUMP)).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["data"][0]["date_attributes"]["withinFive"].is_array());
        assert!(value["expungements"].is_object());
    }
}
