use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use courtwatch::application::Services;
use courtwatch::domain::{LiveMatch, MatchId, Probabilities, Side, StatSnapshot};
use courtwatch::error::{Error, NotifyError, Result};
use courtwatch::port::outbound::feed::LiveFeed;
use courtwatch::port::outbound::notifier::{Alert, AlertKind, Notifier};
use courtwatch::port::outbound::odds::OddsSource;
use courtwatch::port::outbound::recorder::{MatchRecord, MatchRecorder};

/// Live feed whose responses are set by the test between ticks.
#[derive(Default)]
pub struct ScriptedFeed {
    matches: Mutex<Vec<LiveMatch>>,
    stats: Mutex<HashMap<MatchId, StatSnapshot>>,
    first_servers: Mutex<HashMap<MatchId, Side>>,
    fail_live: AtomicBool,
    stats_calls: AtomicUsize,
}

impl ScriptedFeed {
    pub fn set_matches(&self, matches: Vec<LiveMatch>) {
        *self.matches.lock().expect("lock matches") = matches;
    }

    pub fn set_stats(&self, id: MatchId, snapshot: StatSnapshot) {
        self.stats.lock().expect("lock stats").insert(id, snapshot);
    }

    pub fn set_first_server(&self, id: MatchId, side: Side) {
        self.first_servers
            .lock()
            .expect("lock first servers")
            .insert(id, side);
    }

    pub fn fail_live_fetch(&self, fail: bool) {
        self.fail_live.store(fail, Ordering::SeqCst);
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LiveFeed for ScriptedFeed {
    async fn live_matches(&self) -> Result<Vec<LiveMatch>> {
        if self.fail_live.load(Ordering::SeqCst) {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "scripted outage",
            )));
        }
        Ok(self.matches.lock().expect("lock matches").clone())
    }

    async fn statistics(&self, id: MatchId) -> Result<Option<StatSnapshot>> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stats.lock().expect("lock stats").get(&id).copied())
    }

    async fn first_server(&self, id: MatchId, _set: u8) -> Result<Option<Side>> {
        Ok(self
            .first_servers
            .lock()
            .expect("lock first servers")
            .get(&id)
            .copied())
    }
}

/// Odds source returning one fixed answer.
#[derive(Default)]
pub struct ScriptedOdds {
    answer: Mutex<Option<Probabilities>>,
    calls: AtomicUsize,
}

impl ScriptedOdds {
    pub fn set_answer(&self, answer: Option<Probabilities>) {
        *self.answer.lock().expect("lock odds") = answer;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OddsSource for ScriptedOdds {
    async fn match_odds(&self, _home: &str, _away: &str) -> Result<Option<Probabilities>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(*self.answer.lock().expect("lock odds"))
    }
}

/// Notifier that records delivered alerts and can fail on demand.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<Alert>>,
    attempts: AtomicUsize,
    failures_left: AtomicUsize,
}

impl RecordingNotifier {
    /// Reject the next `count` deliveries.
    pub fn fail_next(&self, count: usize) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn delivered(&self) -> Vec<Alert> {
        self.delivered.lock().expect("lock alerts").clone()
    }

    pub fn delivered_kinds(&self) -> Vec<AlertKind> {
        self.delivered().iter().map(Alert::kind).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, alert: &Alert) -> std::result::Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(NotifyError::Rejected("scripted failure".into()));
        }
        self.delivered.lock().expect("lock alerts").push(alert.clone());
        Ok(())
    }
}

/// Recorder keeping rows in memory.
#[derive(Default)]
pub struct MemoryRecorder {
    rows: Mutex<Vec<MatchRecord>>,
}

impl MemoryRecorder {
    pub fn rows(&self) -> Vec<MatchRecord> {
        self.rows.lock().expect("lock rows").clone()
    }
}

#[async_trait]
impl MatchRecorder for MemoryRecorder {
    async fn record(&self, record: &MatchRecord) -> Result<()> {
        self.rows.lock().expect("lock rows").push(record.clone());
        Ok(())
    }
}

/// Every fake, plus the [`Services`] bundle wired to them.
pub struct Harness {
    pub feed: Arc<ScriptedFeed>,
    pub odds: Arc<ScriptedOdds>,
    pub notifier: Arc<RecordingNotifier>,
    pub recorder: Arc<MemoryRecorder>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            feed: Arc::new(ScriptedFeed::default()),
            odds: Arc::new(ScriptedOdds::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            recorder: Arc::new(MemoryRecorder::default()),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            feed: self.feed.clone(),
            odds: self.odds.clone(),
            notifier: self.notifier.clone(),
            recorder: self.recorder.clone(),
        }
    }

    /// Services using `recorder` in place of the in-memory one.
    pub fn services_with_recorder(&self, recorder: Arc<dyn MatchRecorder>) -> Services {
        Services {
            recorder,
            ..self.services()
        }
    }
}
