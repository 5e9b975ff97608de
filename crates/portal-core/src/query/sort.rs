//! Allow-listed ordering composition.

use crate::types::locale::Locale;
use crate::types::sorting::SortDirection;

use super::plan::{OrderTerm, QueryPlan};
use super::spec::{EntitySearchSpec, TIE_BREAKER};

/// Order `plan` by `field` if the entity allow-lists it, else by the
/// entity's default ordering (field and direction).
///
/// A tie-break on row identity in the same direction is always appended,
/// so consecutive pages neither skip nor repeat rows with equal keys.
pub fn compose_sort(
    plan: QueryPlan,
    field: Option<&str>,
    direction: SortDirection,
    locale: Locale,
    spec: &EntitySearchSpec,
) -> QueryPlan {
    let (field, direction) = match field.and_then(|name| spec.sort_field(name)) {
        Some(field) => (field, direction),
        None => (spec.default_sort(), spec.default_direction()),
    };

    let plan = plan.order_by(OrderTerm {
        field,
        direction,
        locale,
    });

    if field.name == TIE_BREAKER.name {
        return plan;
    }
    plan.order_by(OrderTerm {
        field: TIE_BREAKER,
        direction,
        locale,
    })
}
