//! Statistics extraction: provider groups into a fixed [`StatSnapshot`].
//!
//! Each metric is found by case-insensitive substring match on the item
//! label. Only the first matching item is used, so duplicated groups do not
//! overwrite earlier values. Anything missing or unparsable is zero.

use serde_json::Value;

use super::dto::{value_as_f64, value_as_u32, StatGroup, StatItem};
use crate::domain::{PerSide, PlayerStats, StatSnapshot};

/// Where a metric lives.
struct Lookup {
    /// Substring the label must contain.
    label: &'static str,
    /// Substring the label must not contain.
    excluding: Option<&'static str>,
    /// Exact label instead of substring.
    exact: bool,
    /// Substring the group name must contain.
    group: Option<&'static str>,
}

impl Lookup {
    const fn contains(label: &'static str) -> Self {
        Self {
            label,
            excluding: None,
            exact: false,
            group: None,
        }
    }

    const fn excluding(self, word: &'static str) -> Self {
        Self {
            excluding: Some(word),
            ..self
        }
    }

    const fn exact(self) -> Self {
        Self { exact: true, ..self }
    }

    const fn in_group(self, group: &'static str) -> Self {
        Self {
            group: Some(group),
            ..self
        }
    }

    fn matches(&self, group: &StatGroup, label: &str) -> bool {
        let label_ok = if self.exact {
            label == self.label
        } else {
            label.contains(self.label)
        };
        label_ok
            && self.excluding.map_or(true, |word| !label.contains(word))
            && self
                .group
                .map_or(true, |g| group.group_name.to_lowercase().contains(g))
    }
}

const FIRST_SERVE: Lookup = Lookup::contains("first serve").excluding("points");
const SECOND_SERVE_POINTS: Lookup = Lookup::contains("second serve points");
const FIRST_SERVE_POINTS: Lookup = Lookup::contains("first serve points");
const RECEIVER_POINTS: Lookup = Lookup::contains("receiver points won");
const BREAK_POINTS_SAVED: Lookup = Lookup::contains("break points saved");
const BREAK_POINTS_CONVERTED: Lookup = Lookup::contains("break points converted");
const ACES: Lookup = Lookup::contains("aces");
const DOUBLE_FAULTS: Lookup = Lookup::contains("double fault");
const TOTAL_POINTS: Lookup = Lookup::contains("total").exact().in_group("points");
const SERVICE_POINTS: Lookup = Lookup::contains("service points won");
const GAMES_WON: Lookup = Lookup::contains("total won").in_group("games");

fn find<'a>(groups: &'a [StatGroup], lookup: &Lookup) -> Option<&'a StatItem> {
    groups.iter().find_map(|group| {
        group.statistics_items.iter().find(|item| {
            item.label()
                .is_some_and(|label| lookup.matches(group, &label))
        })
    })
}

/// Build a snapshot from one statistics period.
#[must_use]
pub fn extract(groups: &[StatGroup]) -> StatSnapshot {
    let mut stats = StatSnapshot::default();

    if let Some(item) = find(groups, &FIRST_SERVE) {
        set(&mut stats, percentages(item), |s, v| s.first_serve_pct = v);
    }
    if let Some(item) = find(groups, &SECOND_SERVE_POINTS) {
        set(&mut stats, percentages(item), |s, v| s.second_serve_pct = v);
        set(&mut stats, counts(item), |s, v| s.second_serve_points = v);
    }
    if let Some(item) = find(groups, &FIRST_SERVE_POINTS) {
        set(&mut stats, counts(item), |s, v| s.first_serve_points = v);
    }
    if let Some(item) = find(groups, &RECEIVER_POINTS) {
        let won = counts(item);
        set(&mut stats, won, |s, v| s.receiver_points_won = v);
        // Points the receiver won are points the server lost.
        set(&mut stats, PerSide::new(won.away, won.home), |s, v| s.opp_pts_on_serve = v);
    }
    if let Some(item) = find(groups, &BREAK_POINTS_SAVED) {
        let home = item.home.as_ref().and_then(saved_of_faced).unwrap_or_default();
        let away = item.away.as_ref().and_then(saved_of_faced).unwrap_or_default();
        set(&mut stats, PerSide::new(home.0, away.0), |s, v| s.bp_saved = v);
        set(&mut stats, PerSide::new(home.1, away.1), |s, v| s.bp_faced = v);
    }
    if let Some(item) = find(groups, &BREAK_POINTS_CONVERTED) {
        set(&mut stats, counts(item), |s, v| s.bp_converted = v);
    }
    if let Some(item) = find(groups, &ACES) {
        set(&mut stats, counts(item), |s, v| s.aces = v);
    }
    if let Some(item) = find(groups, &DOUBLE_FAULTS) {
        set(&mut stats, counts(item), |s, v| s.double_faults = v);
    }
    if let Some(item) = find(groups, &TOTAL_POINTS) {
        set(&mut stats, counts(item), |s, v| s.total_points = v);
    }
    if let Some(item) = find(groups, &SERVICE_POINTS) {
        set(&mut stats, counts(item), |s, v| s.service_points_won = v);
    }
    if let Some(item) = find(groups, &GAMES_WON) {
        set(&mut stats, counts(item), |s, v| s.games_won = v);
    }

    stats
}

fn set(stats: &mut StatSnapshot, values: PerSide<u32>, apply: fn(&mut PlayerStats, u32)) {
    apply(&mut stats.home, values.home);
    apply(&mut stats.away, values.away);
}

/// Plain counts, preferring the numeric value over the display string.
fn counts(item: &StatItem) -> PerSide<u32> {
    let read = |number: &Option<Value>, display: &Option<Value>| {
        number
            .as_ref()
            .and_then(value_as_u32)
            .or_else(|| display.as_ref().and_then(value_as_u32))
            .unwrap_or(0)
    };
    PerSide::new(
        read(&item.home_value, &item.home),
        read(&item.away_value, &item.away),
    )
}

/// `round(value / total * 100)`; a missing total counts as 1, a zero total
/// gives 0.
fn percentages(item: &StatItem) -> PerSide<u32> {
    PerSide::new(
        percentage(item.home_value.as_ref(), item.home_total.as_ref()),
        percentage(item.away_value.as_ref(), item.away_total.as_ref()),
    )
}

fn percentage(value: Option<&Value>, total: Option<&Value>) -> u32 {
    let value = value.and_then(value_as_f64).unwrap_or(0.0);
    let total = total.and_then(value_as_f64).unwrap_or(1.0);
    if total <= 0.0 {
        return 0;
    }
    let pct = (value / total * 100.0).round();
    if pct.is_finite() && pct > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = pct.min(f64::from(u32::MAX)) as u32;
        pct
    } else {
        0
    }
}

/// Parse "saved/faced" from a display string such as `"4/6 (67%)"`.
fn saved_of_faced(value: &Value) -> Option<(u32, u32)> {
    let text = value.as_str()?;
    let fraction = text.split_whitespace().next()?;
    let (saved, faced) = fraction.split_once('/')?;
    Some((saved.trim().parse().ok()?, faced.trim().parse().ok()?))
}
