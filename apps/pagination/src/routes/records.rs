use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use pagination::{PageRequest, PagerOutcome, PaginationState, SummaryWords};

use crate::errors::AppError;
use crate::state::AppState;

/// Raw query pairs, in the order the client sent them.
type QueryPairs = Vec<(String, String)>;

// Upper bounds on client-supplied numbers; rendered rows and links grow with these.
pub const MAX_LIMIT: i64 = 100;
pub const MAX_RANGE: i64 = 10;
pub const MAX_TOTAL: i64 = 1_000_000_000;

#[derive(Debug, Serialize)]
pub struct PaginationResponse {
    pub state: PaginationState,
    pub links: String,
    pub summary: String,
}

/// GET /records
///
/// Synthetic listing over `DEMO_TOTAL_ROWS`; every query parameter except `page` is carried
/// into the generated links.
pub async fn handle_records(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, AppError> {
    let request = PageRequest::new(state.config.demo_total_rows)
        .with_page(int_param(&pairs, "page")?)
        .with_limit(bounded_param(&pairs, "limit", MAX_LIMIT)?.unwrap_or(10))
        .with_range(bounded_param(&pairs, "range", MAX_RANGE)?.unwrap_or(2))
        .with_params(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let mut pager = state.paginator();
    if let PagerOutcome::Redirect { location } = pager.compute(request) {
        return Ok(redirect(location));
    }

    let pager_state = pager.state();
    let first_row = pager_state.offset + 1;
    let last_row = pager_state
        .offset
        .saturating_add(pager_state.limit)
        .min(pager_state.total_rows);
    let rows: String = (first_row..=last_row)
        .map(|n| format!("<li>Registro {n}</li>"))
        .collect();

    let page = format!(
        "<!doctype html><html><body><ul class='records'>{rows}</ul><p>{summary}</p><nav>{links}</nav></body></html>",
        summary = pager.render_summary(&SummaryWords::default()),
        links = pager.render_links("", true),
    );
    Ok(Html(page).into_response())
}

/// GET /api/v1/pagination
///
/// Computes pagination for an arbitrary `total` and returns state plus rendered fragments.
pub async fn handle_pagination(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, AppError> {
    let total = bounded_param(&pairs, "total", MAX_TOTAL)?
        .ok_or_else(|| AppError::Validation("'total' is required".to_string()))?;

    let mut request = PageRequest::new(total)
        .with_page(int_param(&pairs, "page")?)
        .with_limit(bounded_param(&pairs, "limit", MAX_LIMIT)?.unwrap_or(10))
        .with_range(bounded_param(&pairs, "range", MAX_RANGE)?.unwrap_or(2))
        .with_params(
            pairs
                .iter()
                .filter(|(k, _)| !matches!(k.as_str(), "total" | "hash"))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
    if let Some(hash) = str_param(&pairs, "hash") {
        request = request.with_hash(anchor_param(hash)?);
    }

    let mut pager = state.paginator();
    if let PagerOutcome::Redirect { location } = pager.compute(request) {
        return Ok(redirect(location));
    }

    Ok(Json(PaginationResponse {
        links: pager.render_links("", true),
        summary: pager.render_summary(&SummaryWords::default()),
        state: pager.state().clone(),
    })
    .into_response())
}

fn redirect(location: String) -> Response {
    tracing::info!(%location, "redirecting to last valid page");
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Last non-empty value for `key`.
fn str_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

fn int_param(pairs: &[(String, String)], key: &str) -> Result<Option<i64>, AppError> {
    str_param(pairs, key)
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| AppError::Validation(format!("'{key}' must be an integer, got '{raw}'")))
        })
        .transpose()
}

/// Like [`int_param`], but rejects values above `max`.
fn bounded_param(
    pairs: &[(String, String)],
    key: &str,
    max: i64,
) -> Result<Option<i64>, AppError> {
    match int_param(pairs, key)? {
        Some(n) if n > max => Err(AppError::Validation(format!(
            "'{key}' must be at most {max}, got {n}"
        ))),
        other => Ok(other),
    }
}

/// The hash lands verbatim inside `href='...'`, so only plain anchor names are accepted.
fn anchor_param(raw: &str) -> Result<&str, AppError> {
    if raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(raw)
    } else {
        Err(AppError::Validation(format!(
            "'hash' may only contain letters, digits, '-' and '_', got '{raw}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_int_param_absent_or_empty() {
        let q = pairs(&[("page", ""), ("q", "x")]);
        assert_eq!(int_param(&q, "page").expect("no error"), None);
        assert_eq!(int_param(&q, "limit").expect("no error"), None);
    }

    #[test]
    fn test_int_param_takes_last_value() {
        let q = pairs(&[("page", "2"), ("page", "5")]);
        assert_eq!(int_param(&q, "page").expect("no error"), Some(5));
    }

    #[test]
    fn test_int_param_accepts_negatives() {
        let q = pairs(&[("page", "-3")]);
        assert_eq!(int_param(&q, "page").expect("no error"), Some(-3));
    }

    #[test]
    fn test_bounded_param_rejects_above_max() {
        let q = pairs(&[("range", "1000000000000"), ("limit", "100")]);
        assert!(matches!(
            bounded_param(&q, "range", MAX_RANGE),
            Err(AppError::Validation(_))
        ));
        assert_eq!(
            bounded_param(&q, "limit", MAX_LIMIT).expect("within bound"),
            Some(100)
        );
    }

    #[test]
    fn test_bounded_param_lets_negatives_through() {
        let q = pairs(&[("range", "-5")]);
        assert_eq!(
            bounded_param(&q, "range", MAX_RANGE).expect("no error"),
            Some(-5)
        );
    }

    #[test]
    fn test_anchor_param() {
        assert_eq!(anchor_param("results-2_a").expect("plain anchor"), "results-2_a");
        assert!(matches!(
            anchor_param("x' onmouseover='alert(1)"),
            Err(AppError::Validation(_))
        ));
        assert!(anchor_param("a<b").is_err());
    }

    #[test]
    fn test_redirect_sets_found_and_location() {
        let response = redirect("/records?page=10".to_string());
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/records?page=10")
        );
    }

    #[test]
    fn test_int_param_rejects_garbage() {
        let q = pairs(&[("limit", "ten")]);
        assert!(matches!(
            int_param(&q, "limit"),
            Err(AppError::Validation(_))
        ));
    }
}
