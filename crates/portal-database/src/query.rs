//! Compilation of a [`QueryPlan`] into PostgreSQL.
//!
//! Column names come from static entity declarations and are quoted as
//! identifiers; every caller-supplied value is bound as a parameter.

use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};

use portal_core::query::{Condition, FieldKind, FieldRef, OrderTerm, QueryPlan};
use portal_core::types::{ColumnValue, FilterValue, Locale};

/// Quote an identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `%term%` with `LIKE` metacharacters escaped, so the match is literal
/// containment.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Append `WHERE` with every condition of `plan` ANDed.
pub fn push_where(builder: &mut QueryBuilder<'_, Postgres>, plan: &QueryPlan) {
    for (i, condition) in plan.conditions().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        push_condition(builder, condition);
    }
}

fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
    match condition {
        Condition::AnyContains { fields, term } => {
            if fields.is_empty() {
                builder.push("TRUE");
                return;
            }
            let pattern = like_pattern(term);
            builder.push("(");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    builder.push(" OR ");
                }
                push_contains(builder, field, pattern.clone());
            }
            builder.push(")");
        }
        Condition::Equals { column, value } => {
            let column = quote_ident(column);
            match value {
                FilterValue::Text(v) => {
                    builder.push(format!("{column} = ")).push_bind(v.clone());
                }
                FilterValue::Integer(v) => {
                    builder.push(format!("{column} = ")).push_bind(*v);
                }
                FilterValue::Boolean(v) => {
                    builder.push(format!("{column} = ")).push_bind(*v);
                }
                FilterValue::Date(v) => {
                    builder.push(format!("{column}::date = ")).push_bind(*v);
                }
            }
        }
        Condition::AllTags { column, tags } => {
            builder
                .push(format!("{} @> ", quote_ident(column)))
                .push_bind(tags.clone());
        }
    }
}

fn push_contains(builder: &mut QueryBuilder<'_, Postgres>, field: &FieldRef, pattern: String) {
    let column = quote_ident(field.name);
    match field.kind {
        FieldKind::Plain => {
            builder.push(format!("{column}::text ILIKE ")).push_bind(pattern);
        }
        // Localized columns match in any locale, including codes outside `Locale::ALL`.
        FieldKind::Localized => {
            builder
                .push(format!(
                    "EXISTS (SELECT 1 FROM jsonb_each_text({column}) AS loc(code, value) \
                     WHERE loc.value ILIKE "
                ))
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// Append `ORDER BY` for every term of `plan`.
pub fn push_order(builder: &mut QueryBuilder<'_, Postgres>, plan: &QueryPlan) {
    for (i, term) in plan.ordering().iter().enumerate() {
        builder.push(if i == 0 { " ORDER BY " } else { ", " });
        builder.push(order_expression(term));
        builder.push(" ");
        builder.push(term.direction.as_sql());
    }
}

/// Sort expression for one term. A localized column sorts by the value
/// it resolves to for the term's locale.
fn order_expression(term: &OrderTerm) -> String {
    let column = quote_ident(term.field.name);
    match term.field.kind {
        FieldKind::Plain => column,
        FieldKind::Localized => {
            let mut chain = vec![term.locale];
            chain.extend(Locale::ALL.iter().copied().filter(|l| *l != term.locale));
            let parts: Vec<String> = chain
                .iter()
                .map(|locale| format!("NULLIF({column}->>'{}', '')", locale.code()))
                .collect();
            format!("COALESCE({}, '')", parts.join(", "))
        }
    }
}

/// Bind one column value with its SQL type.
pub fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: ColumnValue) {
    match value {
        ColumnValue::Text(v) => builder.push_bind(v),
        ColumnValue::Int(v) => builder.push_bind(v),
        ColumnValue::BigInt(v) => builder.push_bind(v),
        ColumnValue::Bool(v) => builder.push_bind(v),
        ColumnValue::Date(v) => builder.push_bind(v),
        ColumnValue::Timestamp(v) => builder.push_bind(v),
        ColumnValue::Localized(v) => builder.push_bind(Json(v)),
        ColumnValue::Tags(v) => builder.push_bind(v),
    };
}
