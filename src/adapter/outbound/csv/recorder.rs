//! CSV implementation of [`MatchRecorder`].
//!
//! The header is written once, when the file does not exist yet. Rows are
//! appended and never rewritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::PlayerStats;
use crate::error::Result;
use crate::port::outbound::recorder::{MatchRecord, MatchRecorder};

/// Column names, in order.
pub const HEADER: [&str; 40] = [
    "Timestamp",
    "MatchID",
    "Player1",
    "Player2",
    "P1 Ranking",
    "P2 Ranking",
    "Tournament",
    "SetsScore",
    "GamesScore",
    "CurrentSetGames",
    "P1 1stServe%",
    "P2 1stServe%",
    "P1 2ndServePts%",
    "P2 2ndServePts%",
    "P1 OppPtsOnServe",
    "P2 OppPtsOnServe",
    "P1 BPFaced",
    "P2 BPFaced",
    "P1 BPSaved",
    "P2 BPSaved",
    "P1 Aces",
    "P2 Aces",
    "P1 DoubleFaults",
    "P2 DoubleFaults",
    "P1 TotalPoints",
    "P2 TotalPoints",
    "P1 ServicePointsWon",
    "P2 ServicePointsWon",
    "P1 ReceiverPointsWon",
    "P2 ReceiverPointsWon",
    "P1 GamesWon",
    "P2 GamesWon",
    "P1 FirstServePoints",
    "P2 FirstServePoints",
    "P1 SecondServePoints",
    "P2 SecondServePoints",
    "P1 BPConverted",
    "P2 BPConverted",
    "StartingOdds",
    "LiveOdds",
];

/// Per-player stat columns, in header order.
const STAT_COLUMNS: [fn(&PlayerStats) -> u32; 14] = [
    |s| s.first_serve_pct,
    |s| s.second_serve_pct,
    |s| s.opp_pts_on_serve,
    |s| s.bp_faced,
    |s| s.bp_saved,
    |s| s.aces,
    |s| s.double_faults,
    |s| s.total_points,
    |s| s.service_points_won,
    |s| s.receiver_points_won,
    |s| s.games_won,
    |s| s.first_serve_points,
    |s| s.second_serve_points,
    |s| s.bp_converted,
];

pub struct CsvRecorder {
    path: PathBuf,
}

impl CsvRecorder {
    /// Prepare the log file: create its directory and write the header if
    /// the file is new. Failure here is fatal to startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            let mut file = File::create(&path)?;
            writeln!(file, "{}", HEADER.join(","))?;
            info!(path = %path.display(), "Created match log");
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render one record as a CSV line (no trailing newline).
#[must_use]
pub fn format_row(record: &MatchRecord) -> String {
    let live = &record.live;
    let ranking = |r: Option<u32>| r.map_or_else(|| "N/A".to_string(), |r| r.to_string());
    let current = live.current_games();

    let mut fields = vec![
        record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        live.id.to_string(),
        live.players.home.name.clone(),
        live.players.away.name.clone(),
        ranking(live.players.home.ranking),
        ranking(live.players.away.ranking),
        live.category.to_string(),
        format!("{} sets", live.sets_label()),
        format!("{} games", current.unwrap_or_default()),
        current.map_or_else(|| "N/A".to_string(), |g| g.to_string()),
    ];
    for column in STAT_COLUMNS {
        fields.push(column(&record.stats.home).to_string());
        fields.push(column(&record.stats.away).to_string());
    }
    fields.push(record.starting_odds.clone());
    fields.push(record.live_odds.clone());

    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field containing a delimiter, quote or line break.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{line}")
}

#[async_trait]
impl MatchRecorder for CsvRecorder {
    async fn record(&self, record: &MatchRecord) -> Result<()> {
        let path = self.path.clone();
        let line = format_row(record);
        let appended = tokio::task::spawn_blocking(move || append_line(&path, &line)).await;
        appended.map_err(io::Error::other)??;
        debug!(path = %self.path.display(), match_id = %record.live.id, "Row appended");
        Ok(())
    }
}
