//! Predictor/outcome scatter plots with a least-squares trend line.

use std::path::Path;

use plotters::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const POINT_SIZE: u32 = 4;

/// Axis range padded by 5% on each side, widened when all values coincide.
fn padded_range(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    if min > max {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span == 0.0 {
        (min - 1.0, max + 1.0)
    } else {
        (min - span * 0.05, max + span * 0.05)
    }
}

/// Least-squares slope and intercept, or `None` for a vertical point cloud.
fn trend_line(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    if points.len() < 2 {
        return None;
    }
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;
    let ss_xx = points.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum::<f64>();
    if ss_xx == 0.0 {
        return None;
    }
    let ss_xy = points
        .iter()
        .map(|&(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>();
    let slope = ss_xy / ss_xx;
    Some((slope, mean_y - slope * mean_x))
}

/// Renders a scatter plot of `points` with axis labels and a red
/// least-squares trend line (omitted when the trend is undefined).
pub(crate) fn render_scatter(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
) -> anyhow::Result<()> {
    let fail = |e: &dyn std::fmt::Display| anyhow::anyhow!("failed to render {}: {e}", path.display());

    let (x_min, x_max) = padded_range(points.iter().map(|&(x, _)| x));
    let (y_min, y_max) = padded_range(points.iter().map(|&(_, y)| y));

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| fail(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| fail(&e))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(|e| fail(&e))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, BLUE.mix(0.6).filled())),
        )
        .map_err(|e| fail(&e))?;

    if let Some((slope, intercept)) = trend_line(points) {
        chart
            .draw_series(LineSeries::new(
                [x_min, x_max].map(|x| (x, slope * x + intercept)),
                RED.stroke_width(2),
            ))
            .map_err(|e| fail(&e))?;
    }

    root.present().map_err(|e| fail(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (min, max) = padded_range([1.0, 3.0].into_iter());
        assert!((min - 0.9).abs() < 1e-12);
        assert!((max - 3.1).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range([2.0, 2.0].into_iter()), (1.0, 3.0));
        assert_eq!(padded_range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_trend_line_fits_exact_line() {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let (slope, intercept) = trend_line(&points).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_line_undefined_for_vertical_cloud() {
        let points = [(1.0, 0.0), (1.0, 5.0)];
        assert!(trend_line(&points).is_none());
    }
}
