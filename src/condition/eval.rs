use super::{Condition, ConditionKind};
use std::collections::HashSet;

/// Every AND term must be present, and at least one OR term when any exist.
/// An empty list of either kind does not block a match.
pub fn matches(characters: &HashSet<String>, conditions: &[Condition]) -> bool {
    let terms = move |kind: ConditionKind| {
        conditions
            .iter()
            .filter(move |c| c.kind() == kind)
            .map(|c| c.term())
    };

    let and_ok = terms(ConditionKind::And).all(|term| characters.contains(term));
    let mut or_terms = terms(ConditionKind::Or).peekable();
    let or_ok = or_terms.peek().is_none() || or_terms.any(|term| characters.contains(term));
    and_ok && or_ok
}
