//! HTML rendering of alerts for Telegram.

use std::fmt::Write;

use crate::domain::{GameScore, KeyStats, LiveMatch, Side};
use crate::port::outbound::notifier::{Alert, AlertDetail};

/// Render an alert as Telegram HTML.
pub fn render_alert(alert: &Alert) -> String {
    let live = &alert.live;
    let (home, away) = (&live.players.home, &live.players.away);

    let mut msg = String::new();
    let _ = writeln!(msg, "{}\n", headline(alert.detail));
    let _ = writeln!(
        msg,
        "<b>{}</b> {} vs <b>{}</b> {}",
        escape_html(&home.name),
        home.ranking_label(),
        escape_html(&away.name),
        away.ranking_label()
    );
    let _ = writeln!(msg, "Tournament: {}", live.category);
    let _ = writeln!(msg, "Score: {}", score_line(alert.detail, live));
    let _ = writeln!(msg, "Match ID: {}", live.id);
    let _ = writeln!(
        msg,
        "Odds: {} → {} (Starting → Live)\n",
        alert.starting_odds, alert.live_odds
    );

    if let Some(details) = details(alert.detail, live) {
        msg.push_str(&details);
        msg.push('\n');
    }

    msg.push_str("<b>Key Stats:</b>\n");
    for side in [Side::Home, Side::Away] {
        push_player_stats(&mut msg, alert, side);
        msg.push('\n');
    }

    let _ = write!(msg, "Time: {}", alert.created_at.format("%Y-%m-%d %H:%M:%S"));
    msg
}

fn headline(detail: AlertDetail) -> &'static str {
    match detail {
        AlertDetail::OneOne => "🎾 <b>1-1 Sets Alert</b>",
        AlertDetail::Break { .. } => "🔴 <b>BREAK ALERT - Player Down a Set Breaks Serve!</b>",
        AlertDetail::Tiebreak => "⚡ <b>TIEBREAK ALERT - 3rd Set Tiebreak!</b>",
    }
}

fn games_label(games: Option<GameScore>) -> String {
    games.map_or_else(|| "N/A".to_string(), |g| g.to_string())
}

fn score_line(detail: AlertDetail, live: &LiveMatch) -> String {
    match detail {
        AlertDetail::OneOne => {
            let current = games_label(live.current_games());
            format!("{} sets, {current} games (Current set: {current})", live.sets_label())
        }
        AlertDetail::Break { .. } => {
            format!("{} sets, 2nd Set: {} games", live.sets_label(), games_label(live.set_games(2)))
        }
        AlertDetail::Tiebreak => format!(
            "{} sets, 3rd Set: {} games (TIEBREAK)",
            live.sets_label(),
            games_label(live.set_games(3))
        ),
    }
}

fn details(detail: AlertDetail, live: &LiveMatch) -> Option<String> {
    match detail {
        AlertDetail::OneOne => None,
        AlertDetail::Break { breaker } => {
            let name = escape_html(&live.players.get(breaker).name);
            let sets = live.sets.unwrap_or_default();
            let own = sets.of(breaker);
            let other = sets.of(breaker.opponent());
            Some(format!(
                "<b>Break Details:</b>\n\
                 • {name} was down {own}-{other} sets\n\
                 • Broke serve in 2nd set at {} games\n",
                games_label(live.set_games(2))
            ))
        }
        AlertDetail::Tiebreak => Some(format!(
            "<b>Tiebreak Details:</b>\n\
             • Match is 1-1 sets, going to tiebreak in 3rd set\n\
             • Current 3rd set score: {} games\n",
            games_label(live.set_games(3))
        )),
    }
}

fn push_player_stats(msg: &mut String, alert: &Alert, side: Side) {
    let player = alert.live.players.get(side);
    let stats = alert.stats.get(side);
    let key = KeyStats::for_side(&alert.stats, side);
    let marker = if alert.verdict.favours(side) { " 🟢" } else { "" };

    let _ = writeln!(
        msg,
        "• <b>{} ({}){marker}:</b>",
        side.label(),
        escape_html(&player.name)
    );
    for (label, share) in [
        ("Service points won", key.service),
        ("Return points won", key.ret),
        ("Total points won", key.total),
        ("Break points saved", key.bp_saved),
    ] {
        let _ = writeln!(
            msg,
            "  - {label}: {}% ({}/{})",
            share.percent(),
            share.won,
            share.played
        );
    }
    let _ = writeln!(msg, "  - Break points converted: {}", stats.bp_converted);
    let _ = writeln!(msg, "  - Games won: {}", stats.games_won);
}

/// Escape text for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
