//! SofaScore REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{Event, EventDetailResponse, LiveEventsResponse, StatisticsResponse};
use super::extract::extract;
use super::settings::SofascoreConfig;
use crate::domain::{breaks, LiveMatch, MatchId, Side, StatSnapshot};
use crate::error::Result;
use crate::port::outbound::feed::LiveFeed;

pub struct SofascoreClient {
    http: HttpClient,
    base_url: String,
}

impl SofascoreClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &SofascoreConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a JSON document. `Ok(None)` on 404, which the API uses for
    /// "nothing yet".
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET");
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.error_for_status()?.text().await?;
        decode(&body).map(Some)
    }
}

/// Parse a response body. Malformed JSON surfaces as [`crate::error::Error::Json`].
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl LiveFeed for SofascoreClient {
    async fn live_matches(&self) -> Result<Vec<LiveMatch>> {
        let Some(response) = self
            .get_json::<LiveEventsResponse>("/sport/tennis/events/live")
            .await?
        else {
            return Ok(Vec::new());
        };

        let matches = response
            .events
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<Event>(raw) {
                Ok(event) => Some(LiveMatch::from(event)),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed live event");
                    None
                }
            })
            .collect();
        Ok(matches)
    }

    async fn statistics(&self, id: MatchId) -> Result<Option<StatSnapshot>> {
        let response = self
            .get_json::<StatisticsResponse>(&format!("/event/{id}/statistics"))
            .await?;
        Ok(response
            .and_then(|r| r.statistics.into_iter().next())
            .map(|period| extract(&period.groups)))
    }

    async fn first_server(&self, id: MatchId, set: u8) -> Result<Option<Side>> {
        let response = self
            .get_json::<EventDetailResponse>(&format!("/event/{id}"))
            .await?;
        let first_to_serve = response
            .and_then(|r| r.event)
            .and_then(|e| e.first_to_serve);

        Ok(first_to_serve
            .and_then(side_from_code)
            .map(|first| breaks::first_server_of_set(first, set)))
    }
}

/// `firstToServe`: 1 is home, 2 is away.
const fn side_from_code(code: u32) -> Option<Side> {
    match code {
        1 => Some(Side::Home),
        2 => Some(Side::Away),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn first_to_serve_codes() {
        assert_eq!(side_from_code(1), Some(Side::Home));
        assert_eq!(side_from_code(2), Some(Side::Away));
        assert_eq!(side_from_code(0), None);
    }

    #[test]
    fn from_config_trims_trailing_slash() {
        let config = SofascoreConfig {
            api_url: "https://scores.example.com/api/v1/".into(),
            ..SofascoreConfig::default()
        };
        assert_eq!(
            SofascoreClient::from_config(&config).base_url,
            "https://scores.example.com/api/v1"
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let blocked = decode::<LiveEventsResponse>("<html>Access denied</html>");
        assert!(matches!(blocked, Err(Error::Json(_))));
        let empty = decode::<LiveEventsResponse>(r#"{"events": []}"#).unwrap();
        assert!(empty.events.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let client = SofascoreClient::new("http://127.0.0.1:1".into());
        assert!(client.live_matches().await.is_err());
        assert!(client.statistics(MatchId::new(1)).await.is_err());
    }
}
