//! Rectangular grid sampling with per-point failure tolerance.

use crate::error::GrapherError;
use crate::grapher::domain::{Domain, SurfaceGrid};
use crate::symbolic::expression_engine::Evaluate;
use log::{debug, warn};
use nalgebra::DMatrix;

/// Samples the evaluator over every (x, y) pair of the domain grid.
///
/// A per-call evaluation failure records NaN at that cell and the pass
/// continues; the grid as a whole is still produced. Only a structural
/// problem - a domain with no points - aborts with
/// [`GrapherError::GridGenerationFailed`]. Complexity is O(Nx*Ny) with the
/// fixed step of the domain; the cell budget was enforced when the domain
/// was built.
pub fn sample(evaluator: &dyn Evaluate, domain: &Domain) -> Result<SurfaceGrid, GrapherError> {
    let xs = domain.x_coords();
    let ys = domain.y_coords();
    if xs.is_empty() || ys.is_empty() {
        return Err(GrapherError::GridGenerationFailed(
            "domain produced no grid points".to_string(),
        ));
    }

    let mut z = DMatrix::from_element(xs.len(), ys.len(), f64::NAN);
    let mut failures = 0usize;
    for (i, &x) in xs.iter().enumerate() {
        for (j, &y) in ys.iter().enumerate() {
            match evaluator.evaluate(x, y) {
                Ok(value) => z[(i, j)] = value,
                Err(_) => failures += 1,
            }
        }
    }

    if failures > 0 {
        warn!(
            "{} of {} grid cells could not be evaluated and were set to NaN",
            failures,
            xs.len() * ys.len()
        );
    } else {
        debug!("sampled {} x {} grid with no failures", xs.len(), ys.len());
    }
    Ok(SurfaceGrid { xs, ys, z })
}
