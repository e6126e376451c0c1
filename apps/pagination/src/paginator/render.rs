//! HTML link list and "showing X to Y of Z" summary, projected from the last compute.
//!
//! Markup follows the common `pagination` / `page-item` / `page-link` class convention so the
//! fragment drops into existing stylesheets unchanged. Labels are emitted verbatim; they come
//! from configuration, not from the request.

use std::fmt::Write as _;

use crate::paginator::config::LabelPair;
use crate::paginator::pager::Paginator;

pub const DEFAULT_CONTAINER_CLASS: &str = "pagination";

/// The four words framing the summary numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryWords {
    pub start: String,
    pub between: String,
    pub of: String,
    pub end: String,
}

impl Default for SummaryWords {
    fn default() -> Self {
        Self::new("Mostrando", "a", "de", "registros")
    }
}

impl SummaryWords {
    pub fn new(
        start: impl Into<String>,
        between: impl Into<String>,
        of: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            between: between.into(),
            of: of.into(),
            end: end.into(),
        }
    }
}

impl Paginator {
    /// Renders the `<ul>` link list, or `""` when all rows fit on one page.
    ///
    /// An empty `container_class` falls back to `pagination`.
    pub fn render_links(&self, container_class: &str, fixed_first_and_last: bool) -> String {
        let state = self.state();
        if state.is_single_page() {
            return String::new();
        }

        let class = if container_class.is_empty() {
            DEFAULT_CONTAINER_CLASS
        } else {
            container_class
        };

        let mut html = format!("<ul class='{class}'>");
        if fixed_first_and_last {
            let first = &self.config().first;
            html.push_str(&self.edge_control(first, 1, state.page == 1));
        }

        for n in state.page.saturating_sub(state.range)..state.page {
            if n >= 1 {
                html.push_str(&self.page_item(n));
            }
        }

        let _ = write!(
            html,
            "<li class='page-item active'><span class='page-link'>{}</span></li>",
            state.page
        );

        let window_end = state.page.saturating_add(state.range).min(state.page_count);
        for n in state.page + 1..=window_end {
            html.push_str(&self.page_item(n));
        }

        if fixed_first_and_last {
            let last = &self.config().last;
            html.push_str(&self.edge_control(
                last,
                state.page_count,
                state.page == state.page_count,
            ));
        }
        html.push_str("</ul>");
        html
    }

    /// Renders `"{start} {from} {between} {to} {of} {total} {end}"`.
    ///
    /// Empty before the first compute and for an empty result set.
    pub fn render_summary(&self, words: &SummaryWords) -> String {
        let state = self.state();
        if !state.is_computed() || state.total_rows == 0 {
            return String::new();
        }

        let count_start = (state.page - 1).saturating_mul(state.limit) + 1;
        let count_end = if state.page != state.page_count {
            state.page.saturating_mul(state.limit)
        } else {
            state.total_rows
        };

        format!(
            "{} {} {} {} {} {} {}",
            words.start, count_start, words.between, count_end, words.of, state.total_rows, words.end
        )
    }

    fn href(&self, page: u64) -> String {
        let state = self.state();
        format!(
            "{}{}{}{}",
            self.config().link,
            page,
            state.hash_fragment.as_deref().unwrap_or(""),
            state.query_string
        )
    }

    fn page_item(&self, page: u64) -> String {
        format!(
            "<li class='page-item'><a class='page-link' title='{} {page}' href='{}'>{page}</a></li>",
            self.config().title,
            self.href(page)
        )
    }

    fn edge_control(&self, pair: &LabelPair, target: u64, disabled: bool) -> String {
        if disabled {
            format!(
                "<li class='page-item disabled'><a class='page-link' title='{}' href='#' tabindex='-1' aria-disabled='true'>{}</a></li>",
                pair.label, pair.glyph
            )
        } else {
            format!(
                "<li class='page-item'><a class='page-link' title='{}' href='{}'>{}</a></li>",
                pair.label,
                self.href(target),
                pair.glyph
            )
        }
    }
}
