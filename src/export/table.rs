use std::path::Path;

use crate::history::ReconstructedHistory;

/// Writes the rating matrix as CSV: header row of display names behind an
/// unnamed index column, then one record per matrix row (row 0 included)
/// keyed by global game number.
pub fn write_history(history: &ReconstructedHistory, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(history.player_ids.len() + 1);
    header.push(String::new());
    header.extend(
        history
            .player_ids
            .iter()
            .map(|id| history.display_name(id).to_string()),
    );
    writer.write_record(&header)?;

    for (game_number, row) in history.matrix.rows().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(game_number.to_string());
        record.extend(row.iter().map(|rating| rating.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
