//! HTTP client for the league stats draft-history endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde_json::{Value, json};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use crate::domain::entities::Entrant;
use crate::domain::sources::RegistrySource;
use crate::error::{AppError, map_reqwest_error};

const RETRY_BASE_DELAY_MS: u64 = 500;

/// Registry source backed by the stats service's draft-history result set.
///
/// The stats service rejects requests without browser-like headers, so a
/// fixed header set is attached to every request.
pub struct HttpRegistrySource {
    client: Client,
    url: String,
    retries: usize,
}

impl HttpRegistrySource {
    /// Builds a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SourceUnavailable`] if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        retries: usize,
    ) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self {
            client,
            url: url.into(),
            retries,
        })
    }

    async fn fetch_once(&self) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("Draft history request failed: {}", e);
                map_reqwest_error(e)
            })?;

        response.json::<Value>().await.map_err(map_reqwest_error)
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    async fn fetch(&self) -> Result<Vec<Entrant>, AppError> {
        info!("Fetching draft history from {}", self.url);

        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
            .map(jitter)
            .take(self.retries);
        let body = Retry::start(strategy, || self.fetch_once()).await?;

        let entrants = parse_draft_history(&body)?;
        info!("Fetched {} draft entrants", entrants.len());
        Ok(entrants)
    }
}

/// Converts the `resultSets[0]` table of a draft-history response into
/// entrants with no external identifier.
///
/// # Errors
///
/// Returns [`AppError::SourceUnavailable`] if the table or one of the
/// `PLAYER_NAME`, `SEASON`, `OVERALL_PICK` columns is missing, or a row
/// cannot be read.
pub fn parse_draft_history(body: &Value) -> Result<Vec<Entrant>, AppError> {
    let table = body
        .get("resultSets")
        .and_then(|sets| sets.get(0))
        .ok_or_else(|| {
            AppError::source_unavailable("Draft history response has no result set", json!({}))
        })?;

    let headers: Vec<&str> = table
        .get("headers")
        .and_then(Value::as_array)
        .map(|h| h.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let column = |name: &str| {
        headers.iter().position(|h| *h == name).ok_or_else(|| {
            AppError::source_unavailable(
                "Draft history response is missing a column",
                json!({ "column": name }),
            )
        })
    };
    let name_col = column("PLAYER_NAME")?;
    let season_col = column("SEASON")?;
    let pick_col = column("OVERALL_PICK")?;

    let rows = table
        .get("rowSet")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::source_unavailable("Draft history response has no rows", json!({}))
        })?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| -> Result<Entrant, AppError> {
            let bad_row = |field: &str| {
                AppError::source_unavailable(
                    "Unreadable draft history row",
                    json!({ "row": i, "field": field }),
                )
            };

            let name = row
                .get(name_col)
                .and_then(Value::as_str)
                .ok_or_else(|| bad_row("PLAYER_NAME"))?;
            let draft_year = row
                .get(season_col)
                .and_then(as_integer)
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| bad_row("SEASON"))?;
            let overall_pick = row
                .get(pick_col)
                .and_then(as_integer)
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| bad_row("OVERALL_PICK"))?;

            Ok(Entrant::new(name.to_string(), None, draft_year, overall_pick))
        })
        .collect()
}

/// Accepts both JSON numbers and numeric strings.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
