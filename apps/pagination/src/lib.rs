//! Page/offset arithmetic plus HTML link and summary rendering for paginated listings.
//!
//! The host supplies the total row count; the [`Paginator`] turns it into the current page,
//! the SQL-style offset, and the markup shown under a listing.

pub mod paginator;

pub use paginator::{
    LabelPair, PageRequest, PagerOutcome, PaginationState, Paginator, PaginatorConfig,
    SummaryWords,
};
