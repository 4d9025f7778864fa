//! Gamma API client.
//!
//! Searches Gamma for the fixture, picks the event whose title names both
//! players, selects the head-to-head market and maps its prices to players.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::dto::SearchResponse;
use super::matcher::{MatchConfidence, Pairing};
use super::settings::PolymarketConfig;
use crate::domain::Probabilities;
use crate::error::Result;
use crate::port::outbound::odds::OddsSource;

/// HTTP client for Gamma market search.
pub struct PolymarketClient {
    http: HttpClient,
    gamma_url: String,
}

impl PolymarketClient {
    #[must_use]
    pub fn new(gamma_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            gamma_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &PolymarketConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            gamma_url: config.gamma_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Raw `public-search` call.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}/public-search", self.gamma_url);
        debug!(url = %url, query, "Searching Gamma");
        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl OddsSource for PolymarketClient {
    async fn match_odds(&self, home: &str, away: &str) -> Result<Option<Probabilities>> {
        let response = self.search(&format!("{home} {away}")).await?;
        if response.events.is_empty() {
            debug!(home, away, "No Gamma events for pairing");
            return Ok(None);
        }

        let pairing = Pairing::new(home, away);
        let Some(event) = pairing.find_event(&response.events) else {
            debug!(home, away, checked = response.events.len(), "No event names both players");
            return Ok(None);
        };

        let Some(market) = pairing.select_market(&event.markets) else {
            debug!(
                event = %event.title,
                checked = event.markets.len(),
                "No head-to-head market in event"
            );
            return Ok(None);
        };

        let Some(resolved) = pairing.resolve(market) else {
            debug!(question = %market.question, "Market prices unusable");
            return Ok(None);
        };

        match resolved.confidence {
            MatchConfidence::Named => info!(
                question = %market.question,
                home_probability = %resolved.probabilities.home,
                away_probability = %resolved.probabilities.away,
                "Resolved market odds"
            ),
            MatchConfidence::Positional => warn!(
                question = %market.question,
                home_probability = %resolved.probabilities.home,
                away_probability = %resolved.probabilities.away,
                "Outcome labels ambiguous, assuming listing order"
            ),
        }
        Ok(Some(resolved.probabilities))
    }
}
