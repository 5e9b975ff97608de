//! An entity's complete listing declaration.

use crate::types::list_request::ListRequest;

use super::plan::{Condition, QueryPlan};
use super::registry::FilterRegistry;
use super::search::compose_search;
use super::sort::compose_sort;
use super::spec::EntitySearchSpec;

/// Search/sort declaration plus filter registry for one content type.
#[derive(Debug)]
pub struct ListingProfile {
    spec: EntitySearchSpec,
    filters: FilterRegistry,
}

impl ListingProfile {
    /// Bundle an entity's declarations.
    pub fn new(spec: EntitySearchSpec, filters: FilterRegistry) -> Self {
        Self { spec, filters }
    }

    /// Search and sort declaration.
    pub fn spec(&self) -> &EntitySearchSpec {
        &self.spec
    }

    /// Filter registry.
    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// Compose the full plan for `request`.
    ///
    /// `scope` (e.g. "published only") is applied first; filters and
    /// search only narrow, and commute with each other. Ordering is
    /// always applied, so the result is deterministic.
    pub fn compose(&self, request: &ListRequest, scope: Option<Condition>) -> QueryPlan {
        let plan = scope.into_iter().fold(QueryPlan::new(), QueryPlan::filter);
        let plan = self.filters.apply(plan, &request.filters);
        let plan = compose_search(plan, request.search.as_deref(), &self.spec);
        compose_sort(
            plan,
            request.sort_by.as_deref(),
            request.sort_order,
            request.locale,
            &self.spec,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingConfig;
    use crate::query::plan::FieldRef;
    use crate::query::registry::predicates;
    use crate::types::filter::FilterValue;
    use crate::types::sorting::SortDirection;

    fn profile() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("date"), SortDirection::Desc)
                .searchable([FieldRef::localized("title")]),
            FilterRegistry::new().register("tags", predicates::all_tags("tags")),
        )
    }

    #[test]
    fn test_compose_orders_scope_filters_search() {
        let mut request = ListRequest::first_page(&ListingConfig::default());
        request.search = Some("форум".into());
        request.filters.insert("tags".into(), "a,b".into());

        let scope = Condition::equals("is_published", FilterValue::Boolean(true));
        let plan = profile().compose(&request, Some(scope.clone()));

        assert_eq!(plan.conditions().len(), 3);
        assert_eq!(plan.conditions()[0], scope);
        assert!(matches!(plan.conditions()[1], Condition::AllTags { .. }));
        assert!(matches!(plan.conditions()[2], Condition::AnyContains { .. }));
        assert!(plan.is_ordered());
    }

    #[test]
    fn test_unconstrained_request_is_still_ordered() {
        let request = ListRequest::first_page(&ListingConfig::default());
        let plan = profile().compose(&request, None);
        assert!(plan.conditions().is_empty());
        assert_eq!(plan.ordering().len(), 2);
    }
}
