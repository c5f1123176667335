//! User predicate templating.
//!
//! The request's free-form constraint body is wrapped into a named `pred`
//! block followed by the caller's run directive, then appended to the base
//! model. The predicate name is fixed so the interpreter can recognize the
//! skolem bindings it introduces.

/// Name given to the user-supplied predicate; skolem bindings in the solver
/// output carry this as their prefix.
pub const PREDICATE_NAME: &str = "userDefinedPredicate";

/// Wrap a predicate body and run directive into appendable model text.
pub fn wrap_predicate(predicate: &str, run: &str) -> String {
    format!("\n\npred {} {{\n{}}}\n{}", PREDICATE_NAME, predicate, run)
}

/// Append the wrapped user predicate to the base model text.
pub fn compose(model: &str, predicate: &str, run: &str) -> String {
    let mut composed = model.to_string();
    composed.push_str(&wrap_predicate(predicate, run));
    composed
}
