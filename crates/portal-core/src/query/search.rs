//! Free-text search composition.

use super::plan::{Condition, QueryPlan};
use super::spec::EntitySearchSpec;

/// Narrow `plan` to rows where `term` occurs in any searchable field.
///
/// An absent or blank term, or an entity without searchable fields,
/// leaves the plan untouched.
pub fn compose_search(plan: QueryPlan, term: Option<&str>, spec: &EntitySearchSpec) -> QueryPlan {
    let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
        return plan;
    };
    if spec.searchable_fields().is_empty() {
        tracing::debug!(term, "Search term ignored: entity declares no searchable fields");
        return plan;
    }

    plan.filter(Condition::AnyContains {
        fields: spec.searchable_fields().to_vec(),
        term: term.to_string(),
    })
}
