pub mod chart;
pub mod summary;
pub mod table;

use log::info;
use std::path::Path;

use crate::config::settings::ChartSettings;
use crate::errors::ExportError;
use crate::history::ReconstructedHistory;

/// Writes both artifacts and prints the stdout summary. The two writes are
/// independent: one failing does not stop the other, and the summary is
/// printed regardless. Returns every failure so the caller reports each one
/// separately; an empty Vec means a clean export.
pub fn export(
    history: &ReconstructedHistory,
    chart_settings: &ChartSettings,
    image_path: &Path,
    csv_path: &Path,
) -> Vec<ExportError> {
    let mut failures = Vec::new();

    match chart::render_chart(history, chart_settings, image_path) {
        Ok(()) => info!("Chart saved to {}", image_path.display()),
        Err(source) => failures.push(ExportError::ImageWrite {
            path: image_path.to_path_buf(),
            source: source.into(),
        }),
    }

    match table::write_history(history, csv_path) {
        Ok(()) => info!("ELO history data saved to {}", csv_path.display()),
        Err(source) => failures.push(ExportError::TableWrite {
            path: csv_path.to_path_buf(),
            source,
        }),
    }

    summary::print_summary(history);
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::RatingSettings;
    use crate::domain::{GlobalMatch, PlayerRecord};
    use crate::history::build_rating_matrix;

    fn sample_history() -> ReconstructedHistory {
        let players = vec![
            PlayerRecord {
                id: "a".to_string(),
                name: Some("Alice".to_string()),
                elo: Some(1200.0),
                matches: vec![],
            },
            PlayerRecord {
                id: "b".to_string(),
                name: Some("Bob".to_string()),
                elo: Some(1000.0),
                matches: vec![],
            },
        ];
        let games = vec![GlobalMatch {
            winner_id: "a".to_string(),
            loser_id: "b".to_string(),
            timestamp: "t1".to_string(),
            winner_elo: Some(1216.0),
            loser_elo: Some(984.0),
        }];
        build_rating_matrix(&players, &games, &RatingSettings::default()).unwrap()
    }

    #[test]
    fn test_chart_failure_does_not_block_table() {
        let dir = tempfile::tempdir().unwrap();
        // Unwritable image path; the CSV must still be attempted and written.
        let image_path = dir.path().join("no-such-dir").join("chart.png");
        let csv_path = dir.path().join("history.csv");

        let failures = export(
            &sample_history(),
            &ChartSettings::default(),
            &image_path,
            &csv_path,
        );

        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], ExportError::ImageWrite { .. }));
        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert!(contents.starts_with(",Alice,Bob"));
    }

    #[test]
    fn test_table_failure_is_reported_separately() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("no-such-dir").join("chart.png");
        let csv_path = dir.path().join("no-such-dir").join("history.csv");

        let failures = export(
            &sample_history(),
            &ChartSettings::default(),
            &image_path,
            &csv_path,
        );

        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], ExportError::ImageWrite { .. }));
        assert!(matches!(failures[1], ExportError::TableWrite { .. }));
    }
}
