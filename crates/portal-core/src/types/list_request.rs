//! Normalization of raw list query parameters.

use std::collections::{BTreeMap, HashMap};
use std::num::IntErrorKind;

use serde::Serialize;

use crate::config::ListingConfig;
use crate::query::profile::ListingProfile;

use super::locale::Locale;
use super::pagination::PageRequest;
use super::sorting::SortDirection;

/// Query parameters with a fixed meaning on every list endpoint.
pub const RESERVED_PARAMS: [&str; 6] = ["search", "sort_by", "sort_order", "page", "per_page", "locale"];

/// A validated description of which slice of which collection to return.
///
/// Built per request from raw parameters; malformed input degrades to
/// defaults and never produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRequest {
    /// Free-text term, trimmed; blank terms are dropped.
    pub search: Option<String>,
    /// Recognized filter name → raw value.
    pub filters: BTreeMap<String, String>,
    /// Allow-listed sort field, if the caller named one.
    pub sort_by: Option<String>,
    /// Requested direction (`desc` unless `asc` was asked for).
    pub sort_order: SortDirection,
    /// Page window.
    pub page: PageRequest,
    /// Locale for resolving multilingual fields.
    pub locale: Locale,
}

impl ListRequest {
    /// A request for the first page with no constraints.
    pub fn first_page(config: &ListingConfig) -> Self {
        Self {
            search: None,
            filters: BTreeMap::new(),
            sort_by: None,
            sort_order: SortDirection::default(),
            page: PageRequest::new(1, config.default_per_page),
            locale: config.default_locale,
        }
    }

    /// Parse raw query parameters against an entity's listing profile.
    ///
    /// `fallback_locale` applies when no valid `locale` parameter is given
    /// (typically derived from `Accept-Language`).
    pub fn normalize(
        params: &HashMap<String, String>,
        fallback_locale: Locale,
        profile: &ListingProfile,
        config: &ListingConfig,
    ) -> Self {
        let param = |name: &str| {
            params
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let search = param("search").map(str::to_string);

        let sort_by = param("sort_by")
            .filter(|name| profile.spec().sort_field(name).is_some())
            .map(str::to_string);

        let page = param("page").and_then(parse_positive).unwrap_or(1);

        let per_page = param("per_page")
            .and_then(parse_positive)
            .map_or(config.default_per_page, |size| size.min(config.max_per_page));

        let locale = param("locale")
            .and_then(Locale::parse)
            .unwrap_or(fallback_locale);

        let filters = params
            .iter()
            .filter(|(name, _)| !RESERVED_PARAMS.contains(&name.as_str()))
            .filter(|(name, _)| profile.filters().recognizes(name))
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, value)| (name.clone(), value.trim().to_string()))
            .collect();

        Self {
            search,
            filters,
            sort_by,
            sort_order: SortDirection::parse_lenient(param("sort_order")),
            page: PageRequest::new(page, per_page),
            locale,
        }
    }
}

/// A positive integer, saturating at `u64::MAX`; `None` for zero,
/// negatives and non-numbers.
fn parse_positive(raw: &str) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(value) => Some(value).filter(|v| *v >= 1),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}
