use anyhow::{bail, Context, Result};
use pagination::{LabelPair, PaginatorConfig};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Row count the demo listing paginates over.
    pub demo_total_rows: i64,
    pub paginator: PaginatorConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut paginator = PaginatorConfig::default()
            .with_link(optional_env("PAGINATION_LINK").unwrap_or_else(|| "/records?page=".into()));
        if let Some(title) = optional_env("PAGINATION_TITLE") {
            paginator = paginator.with_title(title);
        }
        if let Some(raw) = optional_env("PAGINATION_FIRST") {
            paginator = paginator.with_first(
                parse_label_pair(&raw).context("PAGINATION_FIRST must be 'label|glyph'")?,
            );
        }
        if let Some(raw) = optional_env("PAGINATION_LAST") {
            paginator = paginator
                .with_last(parse_label_pair(&raw).context("PAGINATION_LAST must be 'label|glyph'")?);
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            demo_total_rows: std::env::var("DEMO_TOTAL_ROWS")
                .unwrap_or_else(|_| "95".to_string())
                .parse::<i64>()
                .context("DEMO_TOTAL_ROWS must be an integer")?,
            paginator,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Parses `label|glyph`.
fn parse_label_pair(raw: &str) -> Result<LabelPair> {
    let Some((label, glyph)) = raw.split_once('|') else {
        bail!("missing '|' separator in '{raw}'");
    };
    if label.trim().is_empty() || glyph.trim().is_empty() {
        bail!("label and glyph must both be non-empty in '{raw}'");
    }
    Ok(LabelPair::new(label.trim(), glyph.trim()))
}
