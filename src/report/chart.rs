// src/report/chart.rs — Grouped bar chart rendering (plotters)
//
// Rendering sink for the comparison matrix: one bar group per corpus, one
// bar per layout within each group, y axis = total cost. Only called after
// every corpus evaluated successfully.

use std::path::Path;

use plotters::prelude::*;

use crate::infra::errors::KorporaError;
use crate::report::matrix::ComparisonMatrix;

/// Fraction of each group's unit slot occupied by bars.
const GROUP_WIDTH: f64 = 0.8;

pub fn render(
    matrix: &ComparisonMatrix,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), KorporaError> {
    draw(matrix, path, width, height).map_err(|e| KorporaError::Render(e.to_string()))
}

fn draw(
    matrix: &ComparisonMatrix,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let groups = matrix.rows.len();
    let series = matrix.layouts.len();
    if groups == 0 || series == 0 {
        return Err("empty comparison matrix".into());
    }

    let y_max = (matrix.max_cost() * 1.05).max(1.0);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Layout cost by corpus", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..(groups as f64 - 0.5), 0f64..y_max)?;

    let labels: Vec<&str> = matrix.rows.iter().map(|r| r.label.as_str()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups)
        .x_label_formatter(&|x| group_label(&labels, *x).to_string())
        .y_desc("total cost")
        .draw()?;

    for (idx, layout) in matrix.layouts.iter().enumerate() {
        let color = Palette99::pick(idx);
        let bars = matrix.rows.iter().enumerate().filter_map(|(group, row)| {
            row.cells[idx].map(|cost| {
                let (x0, x1) = bar_span(group, series, idx);
                Rectangle::new([(x0, 0.0), (x1, cost)], color.filled())
            })
        });
        chart
            .draw_series(bars)?
            .label(layout)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Horizontal extent of bar `idx` within group `group`.
///
/// Groups are centered on integer x positions. Bars share the group's
/// [`GROUP_WIDTH`] slot evenly, with a sliver of spacing between neighbors.
fn bar_span(group: usize, series: usize, idx: usize) -> (f64, f64) {
    let bar_width = GROUP_WIDTH / series as f64;
    let left = group as f64 - GROUP_WIDTH / 2.0 + idx as f64 * bar_width;
    (left, left + bar_width * 0.9)
}

/// X-axis label for a tick position. Ticks land on integer group centers;
/// anything else gets no label.
fn group_label<'a>(labels: &[&'a str], x: f64) -> &'a str {
    let nearest = x.round();
    if (x - nearest).abs() > 0.01 || nearest < 0.0 {
        return "";
    }
    labels.get(nearest as usize).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_span_fills_group_slot() {
        let (first_left, _) = bar_span(0, 2, 0);
        let (_, last_right) = bar_span(0, 2, 1);
        assert!((first_left + 0.4).abs() < 1e-9);
        assert!(last_right <= 0.4 + 1e-9);
    }

    #[test]
    fn test_bar_span_bars_do_not_overlap() {
        let (_, right0) = bar_span(3, 4, 0);
        let (left1, _) = bar_span(3, 4, 1);
        assert!(right0 < left1 + 1e-9);
    }

    #[test]
    fn test_bar_span_groups_centered_on_integers() {
        let (left, right) = bar_span(5, 1, 0);
        let center = (left + right) / 2.0;
        assert!((center - 5.0).abs() < 0.1);
    }

    #[test]
    fn test_group_label_on_tick() {
        let labels = vec!["eng/a", "eng/b"];
        assert_eq!(group_label(&labels, 0.0), "eng/a");
        assert_eq!(group_label(&labels, 1.0), "eng/b");
    }

    #[test]
    fn test_group_label_off_tick_or_out_of_range() {
        let labels = vec!["eng/a"];
        assert_eq!(group_label(&labels, 0.5), "");
        assert_eq!(group_label(&labels, -1.0), "");
        assert_eq!(group_label(&labels, 7.0), "");
    }
}
