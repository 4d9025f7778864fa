//! SofaScore response types.
//!
//! Every field is optional and numeric fields are read leniently: a value of
//! an unexpected shape becomes `None` instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `/sport/tennis/events/live`. Events stay raw so that one malformed event
/// cannot take the rest of the list down with it.
#[derive(Debug, Default, Deserialize)]
pub struct LiveEventsResponse {
    #[serde(default)]
    pub events: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub home_team: Team,
    #[serde(default)]
    pub away_team: Team,
    #[serde(default)]
    pub tournament: Option<Tournament>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub league: Option<Named>,
    #[serde(default)]
    pub home_score: Score,
    #[serde(default)]
    pub away_score: Score,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Default, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub ranking: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub seed: Option<u32>,
}

impl Team {
    /// First non-zero of ranking, position and seed.
    #[must_use]
    pub fn best_ranking(&self) -> Option<u32> {
        [self.ranking, self.position, self.seed]
            .into_iter()
            .flatten()
            .find(|rank| *rank != 0)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub unique_tournament: Option<Named>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Score {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub current: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub period1: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub period2: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub period3: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub description: String,
}

/// `/event/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct EventDetailResponse {
    #[serde(default)]
    pub event: Option<EventDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub first_to_serve: Option<u32>,
}

/// `/event/{id}/statistics`.
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub statistics: Vec<StatisticsPeriod>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsPeriod {
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub groups: Vec<StatGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatGroup {
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub statistics_items: Vec<StatItem>,
}

/// One metric. `home`/`away` are display strings ("4/6 (67%)", "12"),
/// `homeValue`/`awayValue` the numbers behind them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub home: Option<Value>,
    #[serde(default)]
    pub away: Option<Value>,
    #[serde(default)]
    pub home_value: Option<Value>,
    #[serde(default)]
    pub away_value: Option<Value>,
    #[serde(default)]
    pub home_total: Option<Value>,
    #[serde(default)]
    pub away_total: Option<Value>,
}

impl StatItem {
    /// Lower-cased metric label.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .filter(|label| !label.is_empty())
            .map(str::to_lowercase)
    }
}

/// Read a JSON value as a non-negative integer.
///
/// Numbers are truncated; strings yield their leading digits ("67%" is 67,
/// "4/6 (67%)" is 4). Anything else is `None`.
#[must_use]
pub fn value_as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(truncate_f64)),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Read a JSON number as `f64`.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_f64(value: f64) -> u32 {
    value.min(f64::from(u32::MAX)) as u32
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lenient_integers() {
        assert_eq!(value_as_u32(&json!(12)), Some(12));
        assert_eq!(value_as_u32(&json!(12.9)), Some(12));
        assert_eq!(value_as_u32(&json!("67%")), Some(67));
        assert_eq!(value_as_u32(&json!("4/6 (67%)")), Some(4));
        assert_eq!(value_as_u32(&json!("WC")), None);
        assert_eq!(value_as_u32(&json!(-3)), None);
        assert_eq!(value_as_u32(&json!(null)), None);
    }

    #[test]
    fn malformed_score_fields_become_none() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "homeScore": {"current": "x", "period1": 6},
            "awayTeam": {"name": "B", "seed": "WC", "ranking": 0, "position": 44}
        }))
        .unwrap();
        assert_eq!(event.home_score.current, None);
        assert_eq!(event.home_score.period1, Some(6));
        assert_eq!(event.away_team.best_ranking(), Some(44));
        assert_eq!(event.home_team.best_ranking(), None);
    }

    #[test]
    fn item_label_prefers_name() {
        let item: StatItem = serde_json::from_value(json!({"name": "Aces", "title": "x"})).unwrap();
        assert_eq!(item.label().as_deref(), Some("aces"));
        let item: StatItem = serde_json::from_value(json!({"title": "Double faults"})).unwrap();
        assert_eq!(item.label().as_deref(), Some("double faults"));
    }
}
