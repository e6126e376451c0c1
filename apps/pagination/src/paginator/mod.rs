// Pagination core: compute once per request, then render links and the summary line.
// Nothing here performs I/O; redirects are handed back to the caller as a PagerOutcome.

pub mod config;
pub mod pager;
pub mod query;
pub mod render;
pub mod request;
pub mod state;

// Re-export the public API consumed by hosts (route handlers, templates).
pub use config::{LabelPair, PaginatorConfig};
pub use pager::{PagerOutcome, Paginator};
pub use render::SummaryWords;
pub use request::PageRequest;
pub use state::PaginationState;
