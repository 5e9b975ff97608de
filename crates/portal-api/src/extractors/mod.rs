//! Custom Axum extractors.

pub mod body;
pub mod list;
pub mod locale;
pub mod path;

pub use body::JsonBody;
pub use list::ListParams;
pub use locale::RequestLocale;
pub use path::parse_id;
