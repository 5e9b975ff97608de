//! Per-entity search and sort declarations.

use crate::types::sorting::SortDirection;

use super::plan::FieldRef;

/// Column used to break ties between equal sort keys.
pub const TIE_BREAKER: FieldRef = FieldRef::plain("id");

/// Which fields of an entity are searchable and sortable, plus its
/// default ordering.
///
/// Built once at startup per content type and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySearchSpec {
    searchable: Vec<FieldRef>,
    sortable: Vec<FieldRef>,
    default_sort: FieldRef,
    default_direction: SortDirection,
}

impl EntitySearchSpec {
    /// Declare an entity whose default ordering is `default_sort`.
    ///
    /// The default sort field is always part of the sortable allow-list.
    pub fn new(default_sort: FieldRef, default_direction: SortDirection) -> Self {
        Self {
            searchable: Vec::new(),
            sortable: vec![default_sort],
            default_sort,
            default_direction,
        }
    }

    /// Declare the searchable fields. An empty list disables search.
    pub fn searchable(mut self, fields: impl IntoIterator<Item = FieldRef>) -> Self {
        self.searchable = fields.into_iter().collect();
        self
    }

    /// Extend the sortable allow-list.
    pub fn sortable(mut self, fields: impl IntoIterator<Item = FieldRef>) -> Self {
        for field in fields {
            if !self.sortable.iter().any(|f| f.name == field.name) {
                self.sortable.push(field);
            }
        }
        self
    }

    /// Searchable fields.
    pub fn searchable_fields(&self) -> &[FieldRef] {
        &self.searchable
    }

    /// Sortable allow-list.
    pub fn sortable_fields(&self) -> &[FieldRef] {
        &self.sortable
    }

    /// Look up an allow-listed sort field by name.
    pub fn sort_field(&self, name: &str) -> Option<FieldRef> {
        self.sortable.iter().copied().find(|f| f.name == name)
    }

    /// Default sort field.
    pub fn default_sort(&self) -> FieldRef {
        self.default_sort
    }

    /// Default sort direction.
    pub fn default_direction(&self) -> SortDirection {
        self.default_direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_allow_listed() {
        let spec = EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc);
        assert_eq!(
            spec.sort_field("sort_order"),
            Some(FieldRef::plain("sort_order"))
        );
        assert_eq!(spec.sort_field("title"), None);
    }

    #[test]
    fn test_sortable_deduplicates() {
        let spec = EntitySearchSpec::new(FieldRef::plain("date"), SortDirection::Desc)
            .sortable([FieldRef::plain("date"), FieldRef::localized("title")]);
        assert_eq!(spec.sortable_fields().len(), 2);
    }
}
