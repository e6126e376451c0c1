use tracing::{debug, warn};

use crate::paginator::config::PaginatorConfig;
use crate::paginator::query::encode_carry_params;
use crate::paginator::request::PageRequest;
use crate::paginator::state::{
    clamp_total_rows, offset_for, page_count, resolve_page, to_positive, PaginationState,
};

/// Result of [`Paginator::compute`].
///
/// `Redirect` tells the host the requested page lies past the data; the host decides how to
/// answer (usually `302 Found` with `location` as the `Location` header).
#[must_use = "a Redirect outcome must be turned into a response by the caller"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerOutcome {
    Computed,
    Redirect { location: String },
}

impl PagerOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, PagerOutcome::Redirect { .. })
    }
}

/// Stateful pager: one instance per request.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginatorConfig,
    state: PaginationState,
}

impl Paginator {
    pub fn new(config: PaginatorConfig) -> Self {
        Self {
            config,
            state: PaginationState::default(),
        }
    }

    /// Recomputes the whole state from `request`.
    ///
    /// The state is stored even when a redirect is returned, so callers can still inspect it.
    pub fn compute(&mut self, request: PageRequest) -> PagerOutcome {
        let total_rows = clamp_total_rows(request.total_rows);
        let limit = to_positive(request.limit);
        let range = to_positive(request.range);
        let page_count = page_count(total_rows, limit);
        let page = resolve_page(request.page, page_count);
        let offset = offset_for(page, limit);

        let hash_fragment = request
            .hash
            .filter(|h| !h.is_empty())
            .map(|h| format!("#{h}"));
        let query_string = encode_carry_params(
            request
                .params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        self.state = PaginationState {
            page,
            page_count,
            total_rows,
            limit,
            offset,
            range,
            hash_fragment,
            query_string,
        };

        debug!(
            total_rows,
            limit,
            page,
            page_count,
            offset,
            requested_page = ?request.page,
            "pagination computed"
        );

        match redirect_target(&self.state, &self.config.link) {
            Some(location) => {
                warn!(%location, offset, total_rows, "requested page lies past the data");
                PagerOutcome::Redirect { location }
            }
            None => PagerOutcome::Computed,
        }
    }

    pub fn page(&self) -> u64 {
        self.state.page
    }

    pub fn page_count(&self) -> u64 {
        self.state.page_count
    }

    pub fn total_rows(&self) -> u64 {
        self.state.total_rows
    }

    pub fn limit(&self) -> u64 {
        self.state.limit
    }

    pub fn offset(&self) -> u64 {
        self.state.offset
    }

    pub fn range(&self) -> u64 {
        self.state.range
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }
}

/// Location of the last valid page when `state.offset` points past the data.
///
/// Unreachable through [`Paginator::compute`] since the page is clamped first; kept as a guard
/// for hand-built states.
pub fn redirect_target(state: &PaginationState, link: &str) -> Option<String> {
    if state.total_rows > 0 && state.offset >= state.total_rows {
        Some(format!("{link}{}", page_count(state.total_rows, state.limit)))
    } else {
        None
    }
}
