use anyhow::Result;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use report::{AnalysisReport, sorted_desc};

pub fn generate_plots(report: &AnalysisReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    // Plot 1: Most frequent entities
    let entity_bars: Vec<(String, f64)> = report
        .top_entities
        .iter()
        .map(|e| (e.text.clone(), e.count as f64))
        .collect();
    let entity_path = output_dir.join("entity_frequency.png");
    plot_bars(&entity_bars, "Entity Frequency", "Occurrences", &entity_path, BLUE)?;

    // Plot 2: Relation type distribution
    let relation_bars: Vec<(String, f64)> = sorted_desc(&report.statistics.relation_types)
        .into_iter()
        .map(|(predicate, count)| (predicate.to_string(), count as f64))
        .collect();
    let relation_path = output_dir.join("relation_types.png");
    plot_bars(&relation_bars, "Relation Types", "Relations", &relation_path, GREEN)?;

    Ok(vec![entity_path, relation_path])
}

fn plot_bars(
    bars: &[(String, f64)],
    caption: &str,
    y_desc: &str,
    path: &Path,
    color: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = bars.iter().map(|(_, v)| *v).fold(1.0f64, f64::max);
    let slots = bars.len().max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(slots - 0.5), 0f64..(max_value * 1.2))?;

    let label_at = |x: &f64| bar_label(bars, *x);

    chart.configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len().max(1))
        .x_label_formatter(&label_at)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
        Rectangle::new([
            (i as f64 - 0.3, 0.0),
            (i as f64 + 0.3, *value),
        ], color.filled())
    }))?;

    root.present()?;
    info!(path = %path.display(), bars = bars.len(), "Saved plot");
    Ok(())
}

/// Label for an axis tick. Bars sit on integer positions; other ticks stay blank.
fn bar_label(bars: &[(String, f64)], x: f64) -> String {
    if x < 0.0 || (x - x.round()).abs() > 0.01 {
        return String::new();
    }
    bars.get(x.round() as usize)
        .map(|(label, _)| label.clone())
        .unwrap_or_default()
}
