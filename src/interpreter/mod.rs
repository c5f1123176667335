//! # Solution Interpreter
//!
//! Turns the solver's free-form textual state dump into structured output.
//!
//! The dump is a loosely delimited relational-algebra listing: per-state
//! blocks introduced by `------State N-------` headers, each containing
//! `name={tuple, tuple, ...}` assignments, plus whole-solution skolem
//! bindings introduced by the user predicate. There is no formal schema, so
//! the pipeline is deliberately two-staged: a segmenter that finds every
//! state block, and a relation matcher parameterized by relation name.
//!
//! "No solution data" (zero state blocks, absent relations, unsatisfiable
//! runs) is never an error at this layer; every extractor degrades to an
//! empty set.

pub mod event;
pub mod expungement;
pub mod output;
pub mod relation;
pub mod segmenter;
pub mod skolem;
pub mod violations;

pub use event::EventRecord;
pub use output::{EligibilityReport, EventReport, FullReport};
pub use segmenter::StateBlock;
pub use skolem::AtomIdentifierMap;

/// Binary event→date relation, the backbone of every output mode.
pub const EVENT_DATE_RELATION: &str = "this/Event<:date";

/// Unary set of all event atoms in a state.
pub const EVENT_SET: &str = "this/Event";

/// Unary set holding the state's current date.
pub const NOW_SET: &str = "this/now";

/// Eligibility set: events the model certifies as expunged.
pub const ELIGIBILITY_SET: &str = "this/pastExpunged";

/// Classification sets tested per event.
pub const OWI_SET: &str = "this/OWI";
pub const TEN_YEAR_FELONY_SET: &str = "this/TenYearFelony";
pub const ASSAULTIVE_SET: &str = "this/Assaultive";

/// Atoms carrying this prefix are expungement artifacts from the model, not
/// real events, and are excluded from every emitted event list.
pub const ARTIFACT_PREFIX: &str = "Expungement";
