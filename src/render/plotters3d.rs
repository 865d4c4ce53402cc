//! 3D surface rendering with plotters.
//!
//! Each frame becomes a PNG at `<output_dir>/<target_id>.png`, so plotting
//! again with the same target redraws in place. Cells the sampler marked NaN
//! are drawn at the floor of the z window instead of tearing the mesh.

use crate::error::GrapherError;
use crate::render::frame::{RenderFrame, SurfaceRenderer};
use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;
use std::path::PathBuf;

pub struct PlottersSurface {
    output_dir: PathBuf,
}

impl PlottersSurface {
    pub fn new(output_dir: PathBuf) -> Self {
        PlottersSurface { output_dir }
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> GrapherError {
    GrapherError::RenderFailed(e.to_string())
}

// Axis ranges must be non-degenerate even for a single-point interval.
fn padded(values: &[f64]) -> (f64, f64) {
    let lo = values.first().copied().unwrap_or(0.0);
    let hi = values.last().copied().unwrap_or(0.0);
    if lo < hi { (lo, hi) } else { (lo - 0.5, hi + 0.5) }
}

// Always returns lo < hi: height_at clamps into this window and f64::clamp
// panics on an inverted pair.
fn z_window(frame: &RenderFrame) -> (f64, f64) {
    let (clip_lo, clip_hi) = frame.z_clip;
    let (lo, hi) = match frame
        .grid
        .z
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax()
    {
        MinMaxResult::NoElements => (clip_lo, clip_hi),
        MinMaxResult::OneElement(v) => (v - 1.0, v + 1.0),
        MinMaxResult::MinMax(a, b) => (a, b),
    };
    let (lo, hi) = (lo.max(clip_lo), hi.min(clip_hi));
    if lo < hi {
        (lo, hi)
    } else if clip_lo < clip_hi {
        // data range and clip window are disjoint; the clipped surface sits
        // flat on one edge of the clip window
        (clip_lo, clip_hi)
    } else {
        let mid = 0.5 * (lo + hi);
        (mid - 1.0, mid + 1.0)
    }
}

impl SurfaceRenderer for PlottersSurface {
    fn draw(&self, frame: &RenderFrame) -> Result<(), GrapherError> {
        let path = self.output_dir.join(format!("{}.png", frame.target_id));
        let root = BitMapBackend::new(&path, (800, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let grid = frame.grid;
        let (x_lo, x_hi) = padded(&grid.xs);
        let (y_lo, y_hi) = padded(&grid.ys);
        let (z_lo, z_hi) = z_window(frame);
        let z_span = z_hi - z_lo;

        // vertical axis of the 3D chart is the sampled height
        let mut chart = ChartBuilder::on(&root)
            .caption(&frame.title, ("sans-serif", 40))
            .margin(10)
            .build_cartesian_3d(x_lo..x_hi, z_lo..z_hi, y_lo..y_hi)
            .map_err(render_err)?;
        chart.with_projection(|mut pb| {
            pb.pitch = 0.9;
            pb.yaw = 0.6;
            pb.scale = 0.8;
            pb.into_matrix()
        });
        chart.configure_axes().draw().map_err(render_err)?;

        // xoz hands back the exact coordinates we feed it, so an equality
        // lookup recovers the cell indices
        let height_at = move |x: f64, y: f64| -> f64 {
            let i = grid.xs.iter().position(|&v| v == x);
            let j = grid.ys.iter().position(|&v| v == y);
            let value = match (i, j) {
                (Some(i), Some(j)) => grid.z[(i, j)],
                _ => f64::NAN,
            };
            if value.is_finite() {
                value.clamp(z_lo, z_hi)
            } else {
                z_lo
            }
        };

        let scheme = frame.color;
        chart
            .draw_series(
                SurfaceSeries::xoz(
                    grid.xs.iter().copied(),
                    grid.ys.iter().copied(),
                    height_at,
                )
                .style_func(&|&v| {
                    let (h, s, l) = scheme.shade((v - z_lo) / z_span);
                    HSLColor(h, s, l).mix(0.85).into()
                }),
            )
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}
