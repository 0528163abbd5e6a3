//! PNG rendering of heatmaps and scatter plots.

mod heatmap;
mod scatter;

pub(crate) use heatmap::{ColorRamp, render_heatmap};
pub(crate) use scatter::render_scatter;
