//! Live event payload to [`LiveMatch`].

use super::dto::Event;
use crate::domain::{LiveMatch, MatchId, PerSide, Player, SetGames, SetScore, TourCategory};

impl From<Event> for LiveMatch {
    fn from(event: Event) -> Self {
        let category = TourCategory::classify(classification_fields(&event));
        let tournament_name = tournament_name(&event);

        let home = &event.home_score;
        let away = &event.away_score;
        let games = SetGames::new(
            [home.period1, home.period2, home.period3],
            [away.period1, away.period2, away.period3],
        );

        Self {
            id: MatchId::new(event.id),
            players: PerSide::new(
                Player::new(event.home_team.name.clone(), event.home_team.best_ranking()),
                Player::new(event.away_team.name.clone(), event.away_team.best_ranking()),
            ),
            category,
            tournament_name,
            sets: SetScore::from_counts(home.current, away.current),
            games,
            status: event.status.description,
        }
    }
}

fn tournament_name(event: &Event) -> Option<String> {
    tournament_name_ref(event).map(str::to_string)
}

/// Every free-text field the classifier searches.
fn classification_fields(event: &Event) -> Vec<&str> {
    let tournament = event.tournament.as_ref();
    let tournament_category = tournament.and_then(|t| t.category.as_ref());

    let mut fields = Vec::new();
    if let Some(name) = tournament_name_ref(event) {
        fields.push(name);
    }
    fields.extend(tournament_category.and_then(|c| c.slug.as_deref()));
    fields.extend(tournament_category.and_then(|c| c.name.as_deref()));
    fields.extend(tournament.and_then(|t| t.slug.as_deref()));
    fields.extend(
        tournament
            .and_then(|t| t.unique_tournament.as_ref())
            .and_then(|u| u.name.as_deref()),
    );
    fields.extend(event.category.as_ref().and_then(|c| c.slug.as_deref()));
    fields
}

/// Display name: tournament, then category, then the tournament's category,
/// then league.
fn tournament_name_ref(event: &Event) -> Option<&str> {
    let tournament = event.tournament.as_ref();
    [
        tournament.and_then(|t| t.name.as_deref()),
        event.category.as_ref().and_then(|c| c.name.as_deref()),
        tournament
            .and_then(|t| t.category.as_ref())
            .and_then(|c| c.name.as_deref()),
        event.league.as_ref().and_then(|l| l.name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .find(|name| !name.is_empty())
}
