//! 3D surface rendering through gnuplot.
//!
//! Alternate backend for hosts with a gnuplot installation; the z matrix is
//! handed over row-major with the domain rectangle, and gnuplot treats NaN
//! cells as missing data on its own.

use crate::error::GrapherError;
use crate::render::frame::{RenderFrame, SurfaceRenderer};
use gnuplot::{AxesCommon, Figure};
use std::path::PathBuf;

pub struct GnuplotSurface {
    output_dir: PathBuf,
}

impl GnuplotSurface {
    pub fn new(output_dir: PathBuf) -> Self {
        GnuplotSurface { output_dir }
    }
}

// The coordinate vectors are ordered, so the corners are first/last.
fn corners(values: &[f64]) -> Result<(f64, f64), GrapherError> {
    match (values.first(), values.last()) {
        (Some(&lo), Some(&hi)) => Ok((lo, hi)),
        _ => Err(GrapherError::RenderFailed(
            "grid has no points to draw".to_string(),
        )),
    }
}

impl SurfaceRenderer for GnuplotSurface {
    fn draw(&self, frame: &RenderFrame) -> Result<(), GrapherError> {
        let grid = frame.grid;
        let (x_lo, x_hi) = corners(&grid.xs)?;
        let (y_lo, y_hi) = corners(&grid.ys)?;
        let (z_lo, z_hi) = frame.z_clip;

        // DMatrix iterates column-major; gnuplot wants the rows (x) first
        let z_rows: Vec<f64> = grid
            .z
            .row_iter()
            .flat_map(|row| row.iter().map(|&v| v.clamp(z_lo, z_hi)).collect::<Vec<f64>>())
            .collect();

        let mut fg = Figure::new();
        fg.axes3d()
            .set_title(&frame.title, &[])
            .set_x_label("x", &[])
            .set_y_label("y", &[])
            .set_z_label("z", &[])
            .surface(
                z_rows.iter().copied(),
                grid.xs.len(),
                grid.ys.len(),
                Some((x_lo, y_lo, x_hi, y_hi)),
                &[],
            );

        let path = self.output_dir.join(format!("{}.png", frame.target_id));
        let path_text = path.to_string_lossy().to_string();
        fg.save_to_png(&path_text, 800, 600)
            .map_err(|e| GrapherError::RenderFailed(format!("gnuplot: {:?}", e)))?;
        Ok(())
    }
}
