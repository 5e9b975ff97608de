//! Generic query composition: search, filters, sorting and pagination
//! over any content type.

pub mod paginate;
pub mod plan;
pub mod profile;
pub mod registry;
pub mod search;
pub mod sort;
pub mod spec;

pub use paginate::paginate;
pub use plan::{Condition, FieldKind, FieldRef, OrderTerm, QueryPlan};
pub use profile::ListingProfile;
pub use registry::{FilterRegistry, Predicate, predicates};
pub use search::compose_search;
pub use sort::compose_sort;
pub use spec::{EntitySearchSpec, TIE_BREAKER};
