//! Storage-agnostic description of a composed list query.
//!
//! Composers append to a [`QueryPlan`]; storage collaborators either
//! compile it to SQL or evaluate it against in-memory rows.

use crate::traits::content::Content;
use crate::types::filter::{ColumnValue, FilterValue};
use crate::types::locale::Locale;
use crate::types::sorting::SortDirection;

/// How a column stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A scalar column.
    Plain,
    /// A locale map column (see [`LocalizedText`](crate::types::LocalizedText)).
    Localized,
}

/// A declared column reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    /// Column name.
    pub name: &'static str,
    /// Storage shape of the column.
    pub kind: FieldKind,
}

impl FieldRef {
    /// A scalar column.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Plain,
        }
    }

    /// A locale map column.
    pub const fn localized(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Localized,
        }
    }

    /// Whether the column holds a locale map.
    pub fn is_localized(&self) -> bool {
        self.kind == FieldKind::Localized
    }
}

/// A single narrowing condition. All conditions of a plan are ANDed.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive containment of `term` in ANY of `fields`.
    ///
    /// Localized fields match against every locale value.
    AnyContains {
        /// Fields to search.
        fields: Vec<FieldRef>,
        /// The raw term (not lowercased, not escaped).
        term: String,
    },
    /// `column = value`.
    Equals {
        /// Column name.
        column: &'static str,
        /// Operand.
        value: FilterValue,
    },
    /// The tag column contains EVERY listed tag.
    AllTags {
        /// Tag array column name.
        column: &'static str,
        /// Required tags.
        tags: Vec<String>,
    },
}

impl Condition {
    /// Shorthand for an equality condition.
    pub fn equals(column: &'static str, value: FilterValue) -> Self {
        Self::Equals { column, value }
    }

    /// Evaluate the condition against a loaded row.
    ///
    /// Same semantics as the SQL compilation: unknown columns never match.
    pub fn is_satisfied_by<E: Content>(&self, row: &E) -> bool {
        match self {
            Self::AnyContains { fields, term } => {
                let needle = term.to_lowercase();
                fields.is_empty()
                    || fields.iter().any(|field| {
                        row.column(field.name)
                            .is_some_and(|value| value.contains_lowercase(&needle))
                    })
            }
            Self::Equals { column, value } => row.column(column).is_some_and(|c| c.equals(value)),
            Self::AllTags { column, tags } => match row.column(column) {
                Some(ColumnValue::Tags(have)) => tags.iter().all(|tag| have.contains(tag)),
                _ => false,
            },
        }
    }
}

/// One ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTerm {
    /// Column to order by.
    pub field: FieldRef,
    /// Direction.
    pub direction: SortDirection,
    /// Locale whose resolved value orders a localized column.
    pub locale: Locale,
}

/// A composed, storage-agnostic query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    conditions: Vec<Condition>,
    ordering: Vec<OrderTerm>,
}

impl QueryPlan {
    /// An unfiltered, unordered plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition (AND).
    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append an ordering term.
    pub fn order_by(mut self, term: OrderTerm) -> Self {
        self.ordering.push(term);
        self
    }

    /// Conditions in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Ordering terms, most significant first.
    pub fn ordering(&self) -> &[OrderTerm] {
        &self.ordering
    }

    /// Whether `row` satisfies every condition.
    pub fn matches<E: Content>(&self, row: &E) -> bool {
        self.conditions.iter().all(|c| c.is_satisfied_by(row))
    }

    /// Whether an ordering has been applied.
    pub fn is_ordered(&self) -> bool {
        !self.ordering.is_empty()
    }
}
