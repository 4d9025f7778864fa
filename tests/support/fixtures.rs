use courtwatch::domain::{
    LiveMatch, MatchId, PerSide, Player, PlayerStats, SetGames, SetScore, StatSnapshot,
    TourCategory,
};

/// A live match with the given set score, status and per-set games.
pub fn live_match(id: i64, sets: (u32, u32), status: &str, set_games: &[(u32, u32)]) -> LiveMatch {
    let mut home = [None; 3];
    let mut away = [None; 3];
    for (index, (h, a)) in set_games.iter().enumerate().take(3) {
        home[index] = Some(*h);
        away[index] = Some(*a);
    }
    LiveMatch {
        id: MatchId::new(id),
        players: PerSide::new(
            Player::new("Jannik Sinner", Some(1)),
            Player::new("Carlos Alcaraz", Some(2)),
        ),
        category: TourCategory::Atp,
        tournament_name: Some("ATP Vienna".into()),
        sets: Some(SetScore::new(sets.0, sets.1)),
        games: SetGames::new(home, away),
        status: status.into(),
    }
}

/// Statistics with the given break points converted; everything else plausible.
pub fn stats_with_breaks(home_converted: u32, away_converted: u32) -> StatSnapshot {
    let base = PlayerStats {
        first_serve_pct: 64,
        second_serve_pct: 52,
        opp_pts_on_serve: 20,
        bp_faced: 4,
        bp_saved: 2,
        aces: 5,
        double_faults: 2,
        total_points: 70,
        service_points_won: 40,
        receiver_points_won: 20,
        games_won: 10,
        first_serve_points: 30,
        second_serve_points: 12,
        bp_converted: 0,
    };
    StatSnapshot::new(
        PlayerStats {
            bp_converted: home_converted,
            ..base
        },
        PlayerStats {
            bp_converted: away_converted,
            aces: 9,
            ..base
        },
    )
}
