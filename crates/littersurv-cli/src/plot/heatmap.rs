//! Annotated cell-grid heatmaps for result matrices.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use littersurv_analysis::matrix::ResultMatrix;

const CELL_SIZE: i32 = 96;
const MARGIN_LEFT: i32 = 200;
const MARGIN_TOP: i32 = 64;
const MARGIN_RIGHT: i32 = 48;
const MARGIN_BOTTOM: i32 = 170;

/// Color mapping of cell values.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ColorRamp {
    /// White → red over [0, 1] (similarity-style values).
    Sequential,
    /// Blue → white → red over [-1, 1], centered on zero (signed
    /// association values).
    Diverging,
}

impl ColorRamp {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn color(self, value: f64) -> RGBColor {
        fn lerp(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> RGBColor {
            let t = t.clamp(0.0, 1.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
            RGBColor(
                channel(from.0, to.0),
                channel(from.1, to.1),
                channel(from.2, to.2),
            )
        }

        const WHITE_RGB: (u8, u8, u8) = (255, 255, 255);
        const RED_RGB: (u8, u8, u8) = (178, 24, 43);
        const BLUE_RGB: (u8, u8, u8) = (33, 102, 172);

        match self {
            ColorRamp::Sequential => lerp(WHITE_RGB, RED_RGB, value),
            ColorRamp::Diverging => {
                if value < 0.0 {
                    lerp(WHITE_RGB, BLUE_RGB, -value)
                } else {
                    lerp(WHITE_RGB, RED_RGB, value)
                }
            }
        }
    }

    /// Whether the cell is saturated enough to need light annotation text.
    fn needs_light_text(self, value: f64) -> bool {
        match self {
            ColorRamp::Sequential => value > 0.6,
            ColorRamp::Diverging => value.abs() > 0.6,
        }
    }
}

/// Renders a labeled square matrix as an annotated heatmap PNG.
///
/// Cells with non-computed outcomes are drawn gray with an `n/a` marker.
/// The file is overwritten if it already exists.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn render_heatmap(
    path: &Path,
    title: &str,
    matrix: &ResultMatrix,
    ramp: ColorRamp,
) -> anyhow::Result<()> {
    let n = i32::try_from(matrix.len()).unwrap_or(0);
    let width = MARGIN_LEFT + n * CELL_SIZE + MARGIN_RIGHT;
    let height = MARGIN_TOP + n * CELL_SIZE + MARGIN_BOTTOM;
    let fail = |e: &dyn std::fmt::Display| anyhow::anyhow!("failed to render {}: {e}", path.display());

    let root = BitMapBackend::new(path, (width as u32, height as u32)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| fail(&e))?;

    let title_style = ("sans-serif", 26)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        title.to_owned(),
        (width / 2, MARGIN_TOP / 2),
        title_style,
    ))
    .map_err(|e| fail(&e))?;

    let row_style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let column_style = ("sans-serif", 16)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (i, (label, cells)) in matrix.rows().enumerate() {
        let y0 = MARGIN_TOP + i as i32 * CELL_SIZE;
        let y_center = y0 + CELL_SIZE / 2;

        root.draw(&Text::new(
            label.to_owned(),
            (MARGIN_LEFT - 10, y_center),
            row_style.clone(),
        ))
        .map_err(|e| fail(&e))?;

        for (j, cell) in cells.iter().enumerate() {
            let x0 = MARGIN_LEFT + j as i32 * CELL_SIZE;
            let x_center = x0 + CELL_SIZE / 2;

            let (fill, text, light) = match cell.computed() {
                Some(value) => (
                    ramp.color(value),
                    format!("{value:.2}"),
                    ramp.needs_light_text(value),
                ),
                None => (RGBColor(224, 224, 224), "n/a".to_owned(), false),
            };

            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL_SIZE, y0 + CELL_SIZE)],
                fill.filled(),
            ))
            .map_err(|e| fail(&e))?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL_SIZE, y0 + CELL_SIZE)],
                WHITE.stroke_width(2),
            ))
            .map_err(|e| fail(&e))?;

            let annotation_color = if light { WHITE } else { BLACK };
            let annotation_style = ("sans-serif", 18)
                .into_font()
                .color(&annotation_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(text, (x_center, y_center), annotation_style))
                .map_err(|e| fail(&e))?;
        }
    }

    // Column labels along the bottom, rotated to fit long indicator names.
    let grid_bottom = MARGIN_TOP + n * CELL_SIZE;
    for (j, label) in matrix.labels().iter().enumerate() {
        let x_center = MARGIN_LEFT + j as i32 * CELL_SIZE + CELL_SIZE / 2;
        root.draw(&Text::new(
            label.clone(),
            (x_center, grid_bottom + 10),
            column_style.clone(),
        ))
        .map_err(|e| fail(&e))?;
    }

    root.present().map_err(|e| fail(&e))?;
    Ok(())
}
