use crate::config::settings::DEFAULT_RATING;
use crate::history::{RatingValue, ReconstructedHistory};

/// Prints the initial and final rating per player, in column order. This is
/// the human-readable end of the run and is printed even when the artifact
/// writes fail.
pub fn print_summary(history: &ReconstructedHistory) {
    println!("\nInitial ELOs:");
    for id in &history.player_ids {
        println!(
            "- {}: {}",
            history.display_name(id),
            initial_rating(history, id)
        );
    }

    println!("\nFinal ELOs (after all global matches):");
    if let Some(final_row) = history.matrix.last_row() {
        for (id, rating) in history.player_ids.iter().zip(final_row) {
            println!("- {}: {}", history.display_name(id), rating);
        }
    }
}

/// Reconstruction records an initial rating for every column; should an id
/// somehow miss one, fall back to the starting default rather than zero.
fn initial_rating(history: &ReconstructedHistory, id: &str) -> RatingValue {
    history
        .initial_ratings
        .get(id)
        .copied()
        .unwrap_or(DEFAULT_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RatingMatrix;
    use std::collections::HashMap;

    #[test]
    fn test_missing_initial_rating_falls_back_to_default() {
        let history = ReconstructedHistory {
            matrix: RatingMatrix::new(vec!["a".to_string()]),
            player_ids: vec!["a".to_string()],
            display_names: HashMap::new(),
            initial_ratings: HashMap::new(),
            warnings: Vec::new(),
        };

        assert_eq!(initial_rating(&history, "a"), DEFAULT_RATING);
    }

    #[test]
    fn test_recorded_initial_rating_is_used() {
        let mut initial_ratings = HashMap::new();
        initial_ratings.insert("a".to_string(), 1040.0);
        let history = ReconstructedHistory {
            matrix: RatingMatrix::new(vec!["a".to_string()]),
            player_ids: vec!["a".to_string()],
            display_names: HashMap::new(),
            initial_ratings,
            warnings: Vec::new(),
        };

        assert_eq!(initial_rating(&history, "a"), 1040.0);
    }
}
