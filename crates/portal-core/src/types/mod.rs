//! Core type definitions used across the portal workspace.

pub mod filter;
pub mod list_request;
pub mod locale;
pub mod localized_text;
pub mod pagination;
pub mod response;
pub mod sorting;

pub use filter::{ColumnValue, FilterValue};
pub use list_request::{ListRequest, RESERVED_PARAMS};
pub use locale::Locale;
pub use localized_text::{LocalizedText, validate_primary_locale};
pub use pagination::{Page, PageRequest, last_page};
pub use response::{DataEnvelope, ListEnvelope, PaginationMeta};
pub use sorting::SortDirection;
