//! Named, per-entity filter predicates.

use std::collections::BTreeMap;
use std::fmt;

use super::plan::QueryPlan;

/// A registered filter: narrows a plan given the caller's raw value.
pub type Predicate = Box<dyn Fn(QueryPlan, &str) -> QueryPlan + Send + Sync>;

/// The set of filters an entity type opts into, keyed by query-parameter
/// name (`category`, `year`, `tags`, ...).
#[derive(Default)]
pub struct FilterRegistry {
    predicates: BTreeMap<&'static str, Predicate>,
}

impl FilterRegistry {
    /// An empty registry (entity supports no filters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `predicate` under `name`.
    pub fn register<F>(mut self, name: &'static str, predicate: F) -> Self
    where
        F: Fn(QueryPlan, &str) -> QueryPlan + Send + Sync + 'static,
    {
        self.predicates.insert(name, Box::new(predicate));
        self
    }

    /// Whether `name` is a registered filter.
    pub fn recognizes(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered filter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates.keys().copied()
    }

    /// Apply every supplied filter (AND semantics).
    ///
    /// Blank values are skipped. Names the registry does not know are
    /// skipped too, though the list request normalizer drops them earlier.
    pub fn apply(&self, plan: QueryPlan, filters: &BTreeMap<String, String>) -> QueryPlan {
        filters.iter().fold(plan, |plan, (name, value)| {
            let value = value.trim();
            match self.predicates.get(name.as_str()) {
                Some(predicate) if !value.is_empty() => predicate(plan, value),
                _ => plan,
            }
        })
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.predicates.keys()).finish()
    }
}

/// Reusable predicate constructors for registry declarations.
///
/// Values that cannot be parsed for the column's type leave the plan
/// unchanged rather than failing the request.
pub mod predicates {
    use crate::query::plan::{Condition, QueryPlan};
    use crate::types::filter::FilterValue;

    /// `column = value` on a text column.
    pub fn text_equals(column: &'static str) -> impl Fn(QueryPlan, &str) -> QueryPlan + Send + Sync {
        move |plan, value| {
            plan.filter(Condition::equals(column, FilterValue::Text(value.to_string())))
        }
    }

    /// `column = value` restricted to a closed set of values.
    pub fn one_of(
        column: &'static str,
        allowed: &'static [&'static str],
    ) -> impl Fn(QueryPlan, &str) -> QueryPlan + Send + Sync {
        move |plan, value| {
            let value = value.to_ascii_lowercase();
            if allowed.contains(&value.as_str()) {
                plan.filter(Condition::equals(column, FilterValue::Text(value)))
            } else {
                tracing::debug!(column, value = %value, "Filter value outside allowed set ignored");
                plan
            }
        }
    }

    /// `column = value` on an integer column.
    pub fn integer_equals(
        column: &'static str,
    ) -> impl Fn(QueryPlan, &str) -> QueryPlan + Send + Sync {
        move |plan, value| match FilterValue::integer(value) {
            Some(operand) => plan.filter(Condition::equals(column, operand)),
            None => {
                tracing::debug!(column, value, "Non-numeric filter value ignored");
                plan
            }
        }
    }

    /// `column` falls on the given `YYYY-MM-DD` date.
    pub fn date_equals(column: &'static str) -> impl Fn(QueryPlan, &str) -> QueryPlan + Send + Sync {
        move |plan, value| match FilterValue::date(value) {
            Some(operand) => plan.filter(Condition::equals(column, operand)),
            None => {
                tracing::debug!(column, value, "Malformed date filter ignored");
                plan
            }
        }
    }

    /// The tag column contains ALL comma-separated tags.
    pub fn all_tags(column: &'static str) -> impl Fn(QueryPlan, &str) -> QueryPlan + Send + Sync {
        move |plan, value| {
            let mut tags: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            tags.sort();
            tags.dedup();
            if tags.is_empty() {
                return plan;
            }
            plan.filter(Condition::AllTags { column, tags })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::predicates::*;
    use super::*;
    use crate::query::plan::Condition;
    use crate::types::filter::FilterValue;

    fn registry() -> FilterRegistry {
        FilterRegistry::new()
            .register("year", integer_equals("year"))
            .register("type", one_of("type", &["news", "article"]))
            .register("tags", all_tags("tags"))
    }

    fn filters(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filters_compose_with_and() {
        let plan = registry().apply(
            QueryPlan::new(),
            &filters(&[("year", "2024"), ("type", "Article")]),
        );
        assert_eq!(
            plan.conditions(),
            &[
                Condition::equals("type", FilterValue::Text("article".into())),
                Condition::equals("year", FilterValue::Integer(2024)),
            ]
        );
    }

    #[test]
    fn test_tags_are_conjunctive_and_normalized() {
        let plan = registry().apply(QueryPlan::new(), &filters(&[("tags", "b, a,,a")]));
        assert_eq!(
            plan.conditions(),
            &[Condition::AllTags {
                column: "tags",
                tags: vec!["a".into(), "b".into()],
            }]
        );
    }

    #[test]
    fn test_unparseable_and_blank_values_degrade() {
        let plan = registry().apply(
            QueryPlan::new(),
            &filters(&[("year", "last"), ("type", "podcast"), ("tags", " , ")]),
        );
        assert!(plan.conditions().is_empty());
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let plan = registry().apply(QueryPlan::new(), &filters(&[("owner", "1")]));
        assert!(plan.conditions().is_empty());
        assert!(!registry().recognizes("owner"));
    }
}
