use anyhow::Result;
use log::{info, warn};
use std::collections::HashMap;

use super::types::{
    CellUpdate, HistoryWarning, MatchSide, PlayerId, RatingMatrix, RatingValue,
    ReconstructedHistory,
};
use crate::config::settings::RatingSettings;
use crate::domain::{GlobalMatch, PlayerRecord};

/// Recovers each player's rating before any recorded match by walking their
/// personal log backward and undoing every recorded delta.
pub fn compute_initial_ratings(
    players: &[PlayerRecord],
    settings: &RatingSettings,
) -> HashMap<PlayerId, RatingValue> {
    players
        .iter()
        .map(|player| (player.id.clone(), reverse_rating_history(player, settings)))
        .collect()
}

fn reverse_rating_history(player: &PlayerRecord, settings: &RatingSettings) -> RatingValue {
    let mut personal = player.matches.clone();
    // Stable sort: equal timestamps keep their recorded order.
    personal.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut rating = player.elo.unwrap_or(settings.default_rating);
    for game in &personal {
        rating -= game.elo_change.unwrap_or(0.0);
    }
    rating
}

/// Replays the global match log forward into a dense rating matrix with one
/// row per game state (row 0 = before any match) and one column per player.
/// Ids that only ever appear in the match log are added as columns with the
/// fixed default rating; both inputs being non-empty is a precondition.
pub fn build_rating_matrix(
    players: &[PlayerRecord],
    global_matches: &[GlobalMatch],
    settings: &RatingSettings,
) -> Result<ReconstructedHistory> {
    if players.is_empty() || global_matches.is_empty() {
        anyhow::bail!("'players' or 'matches' data is missing or empty");
    }

    let mut sorted_matches = global_matches.to_vec();
    sorted_matches.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut initial_ratings = compute_initial_ratings(players, settings);
    let mut display_names: HashMap<PlayerId, String> = players
        .iter()
        .map(|p| (p.id.clone(), p.display_name().to_string()))
        .collect();
    let mut player_ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
    let mut warnings = Vec::new();

    register_discovered_players(
        &sorted_matches,
        &mut player_ids,
        &mut display_names,
        &mut initial_ratings,
        settings,
        &mut warnings,
    );

    let mut matrix = RatingMatrix::new(player_ids.clone());
    matrix.push_row(
        player_ids
            .iter()
            .map(|id| initial_ratings[id])
            .collect(),
    );

    for (index, game) in sorted_matches.iter().enumerate() {
        let row = index + 1;
        matrix.push_copy_of_last();

        let sides = [
            (MatchSide::Winner, game.winner_id.as_str(), game.winner_elo),
            (MatchSide::Loser, game.loser_id.as_str(), game.loser_elo),
        ];
        for (side, id, recorded) in sides {
            let outcome = apply_recorded_rating(&mut matrix, row, id, recorded);
            if let CellUpdate::SkippedUnknown { id } = outcome {
                let warning = HistoryWarning::SkippedUpdate {
                    id,
                    game_number: row,
                    side,
                };
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    info!(
        "Reconstructed {} rating states for {} players",
        matrix.row_count(),
        player_ids.len()
    );

    Ok(ReconstructedHistory {
        matrix,
        player_ids,
        display_names,
        initial_ratings,
        warnings,
    })
}

/// Ids seen only in the match log get a synthetic display name and the fixed
/// starting rating. This is deliberately independent of the reversal path:
/// there is no personal log to reverse for them.
fn register_discovered_players(
    sorted_matches: &[GlobalMatch],
    player_ids: &mut Vec<PlayerId>,
    display_names: &mut HashMap<PlayerId, String>,
    initial_ratings: &mut HashMap<PlayerId, RatingValue>,
    settings: &RatingSettings,
    warnings: &mut Vec<HistoryWarning>,
) {
    for game in sorted_matches {
        for id in [&game.winner_id, &game.loser_id] {
            if id.is_empty() || display_names.contains_key(id) {
                continue;
            }
            player_ids.push(id.clone());
            display_names.insert(id.clone(), format!("Player {id}"));
            initial_ratings.insert(id.clone(), settings.default_rating);

            let warning = HistoryWarning::UnknownPlayer { id: id.clone() };
            warn!("{warning}");
            warnings.push(warning);
        }
    }
}

/// A side's recorded rating is applied only when the id is non-empty, a
/// rating value is actually present, and the id is a known column; anything
/// else carries the previous row's value forward.
fn apply_recorded_rating(
    matrix: &mut RatingMatrix,
    row: usize,
    id: &str,
    recorded: Option<RatingValue>,
) -> CellUpdate {
    if id.is_empty() {
        return CellUpdate::SkippedEmptyId;
    }
    let Some(rating) = recorded else {
        return CellUpdate::CarriedForward;
    };
    if matrix.set(row, id, rating) {
        CellUpdate::Applied {
            id: id.to_string(),
            rating,
        }
    } else {
        CellUpdate::SkippedUnknown { id: id.to_string() }
    }
}
