use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::config::settings::ChartSettings;
use crate::history::ReconstructedHistory;

/// Renders one line-plus-marker series per player against the global game
/// index. The legend sits in a strip split off outside the plot area so long
/// player lists never cover the curves.
pub fn render_chart(
    history: &ReconstructedHistory,
    settings: &ChartSettings,
    path: &Path,
) -> Result<()> {
    // A matrix without rows has no rating bounds to build axes from.
    if history.matrix.row_count() == 0 {
        anyhow::bail!("rating matrix has no rows to plot");
    }

    let root = BitMapBackend::new(path, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE).context("failed to prepare chart canvas")?;

    let (plot_area, legend_area) =
        root.split_horizontally((settings.width - settings.legend_width) as i32);

    let last_game = history.matrix.row_count().saturating_sub(1);
    let (y_min, y_max) = rating_bounds(history);

    // Integer x coordinates keep the tick labels integer-only.
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(settings.title, ("sans-serif", 32))
        .margin(10)
        .x_label_area_size(55)
        .y_label_area_size(70)
        .build_cartesian_2d(0..last_game, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(settings.x_label)
        .y_desc(settings.y_label)
        .axis_desc_style(("sans-serif", 22))
        .draw()?;

    for (series_index, id) in history.player_ids.iter().enumerate() {
        let color = Palette99::pick(series_index).to_rgba();
        let points: Vec<(usize, f64)> = history
            .matrix
            .column(id)
            .into_iter()
            .flatten()
            .enumerate()
            .collect();

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(settings.line_width),
        ))?;
        chart.draw_series(points.iter().map(|&point| {
            Circle::new(point, settings.marker_size as i32, color.filled())
        }))?;
    }

    draw_legend(&legend_area, history, settings)?;

    root.present()
        .context("failed to write chart image to disk")?;
    Ok(())
}

fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    history: &ReconstructedHistory,
    settings: &ChartSettings,
) -> Result<()> {
    area.draw(&Text::new("Players", (12, 16), ("sans-serif", 22)))?;

    for (series_index, id) in history.player_ids.iter().enumerate() {
        let y = 52 + series_index as i32 * 24;
        let color = Palette99::pick(series_index).to_rgba();

        area.draw(&PathElement::new(
            vec![(12, y), (42, y)],
            color.stroke_width(settings.line_width),
        ))?;
        area.draw(&Text::new(
            history.display_name(id).to_string(),
            (50, y - 8),
            ("sans-serif", 16),
        ))?;
    }
    Ok(())
}

/// Axis bounds with a little headroom; a flat history still gets a visible
/// band instead of a zero-height range.
fn rating_bounds(history: &ReconstructedHistory) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in history.matrix.rows() {
        for &value in row {
            min = min.min(value);
            max = max.max(value);
        }
    }

    let pad = ((max - min) * 0.05).max(10.0);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RatingMatrix;
    use std::collections::HashMap;

    fn history_with_rows(rows: Vec<Vec<f64>>) -> ReconstructedHistory {
        let mut matrix = RatingMatrix::new(vec!["a".to_string()]);
        for row in rows {
            matrix.push_row(row);
        }
        ReconstructedHistory {
            matrix,
            player_ids: vec!["a".to_string()],
            display_names: HashMap::new(),
            initial_ratings: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_empty_matrix_is_rejected_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let history = history_with_rows(vec![]);

        let result = render_chart(&history, &ChartSettings::default(), &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_rating_bounds_pad_the_extremes() {
        let history = history_with_rows(vec![vec![1000.0], vec![1200.0]]);
        let (lo, hi) = rating_bounds(&history);
        assert!(lo < 1000.0);
        assert!(hi > 1200.0);
    }

    #[test]
    fn test_rating_bounds_keep_flat_history_visible() {
        let history = history_with_rows(vec![vec![1000.0], vec![1000.0]]);
        let (lo, hi) = rating_bounds(&history);
        assert!(hi - lo >= 20.0);
    }
}
