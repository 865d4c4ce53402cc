//! Sampling domain and surface data types.
//!
//! The grid layout follows the height-field convention of the renderer:
//! `z` is an Nx x Ny matrix with rows indexed by x and columns by y, next to
//! the ordered coordinate vectors `xs` and `ys` that all three surfaces of a
//! plot cycle share.

use crate::error::GrapherError;
use nalgebra::DMatrix;
use strum_macros::{Display, EnumIter, EnumString};

/// Closed numeric interval, min <= max, both finite. Produced by the range
/// parser, which enforces the invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Rectangular sampling domain: two intervals plus a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub x: Interval,
    pub y: Interval,
    pub step: f64,
}

impl Domain {
    /// Builds a domain and enforces the resource guard: the total number of
    /// grid cells may not exceed `max_cells`, so a pathological range cannot
    /// trigger runaway O(Nx*Ny) sampling.
    pub fn new(
        x: Interval,
        y: Interval,
        step: f64,
        max_cells: usize,
    ) -> Result<Domain, GrapherError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GrapherError::GridGenerationFailed(format!(
                "step must be a positive number, got {}",
                step
            )));
        }
        let requested = point_count(&x, step) * point_count(&y, step);
        if requested > max_cells {
            return Err(GrapherError::DomainTooLarge {
                requested,
                cap: max_cells,
            });
        }
        Ok(Domain { x, y, step })
    }

    /// Ordered x coordinates min, min+step, ... inclusive of max.
    pub fn x_coords(&self) -> Vec<f64> {
        coords(&self.x, self.step)
    }

    /// Ordered y coordinates min, min+step, ... inclusive of max.
    pub fn y_coords(&self) -> Vec<f64> {
        coords(&self.y, self.step)
    }
}

// Coordinates are computed as min + i*step instead of accumulating, and the
// loop bound carries a small epsilon so the last row/column is not dropped
// when floating error overshoots the upper bound.
fn coords(interval: &Interval, step: f64) -> Vec<f64> {
    let bound = interval.max + step * 1e-9;
    let mut out = Vec::with_capacity(point_count(interval, step));
    let mut i = 0usize;
    loop {
        let v = interval.min + step * i as f64;
        if v > bound {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}

fn point_count(interval: &Interval, step: f64) -> usize {
    (interval.width() / step + 1e-9).floor() as usize + 1
}

/// Which of the three surfaces a grid belongs to. An exhaustive enum
/// rather than stringly tab keys, so a missing tab cannot slip through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SurfaceKind {
    Original,
    Dx,
    Dy,
}

impl SurfaceKind {
    /// Stable render target per kind, so repeated plots redraw in place.
    pub fn target_id(&self) -> &'static str {
        match self {
            SurfaceKind::Original => "plot-original",
            SurfaceKind::Dx => "plot-dx",
            SurfaceKind::Dy => "plot-dy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SurfaceKind::Original => "Original function",
            SurfaceKind::Dx => "Partial derivative in x",
            SurfaceKind::Dy => "Partial derivative in y",
        }
    }
}

/// Fully generated height field over a domain. Every cell is either a finite
/// sample or an explicit NaN marking an evaluation failure at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// xs.len() rows by ys.len() columns
    pub z: DMatrix<f64>,
}

impl SurfaceGrid {
    pub fn nan_count(&self) -> usize {
        self.z.iter().filter(|v| v.is_nan()).count()
    }
}

/// One of the three surfaces of a plot cycle. Derivative surfaces carry the
/// textual form of their expression for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSurface {
    pub kind: SurfaceKind,
    pub grid: SurfaceGrid,
    pub derived_expression_text: Option<String>,
}

/// The product of one successful plot cycle: three surfaces sampled over the
/// identical xs/ys grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSurfaces {
    pub original: NamedSurface,
    pub dx: NamedSurface,
    pub dy: NamedSurface,
}

impl PlotSurfaces {
    /// Exhaustive kind-to-surface mapping.
    pub fn surface(&self, kind: SurfaceKind) -> &NamedSurface {
        match kind {
            SurfaceKind::Original => &self.original,
            SurfaceKind::Dx => &self.dx,
            SurfaceKind::Dy => &self.dy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedSurface> {
        [&self.original, &self.dx, &self.dy].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Interval {
        Interval { min: 0.0, max: 1.0 }
    }

    #[test]
    fn test_coords_are_inclusive_of_the_upper_bound() {
        let domain = Domain::new(unit(), unit(), 0.5, 1_000).unwrap();
        assert_eq!(domain.x_coords(), vec![0.0, 0.5, 1.0]);
        assert_eq!(domain.y_coords(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_coords_survive_floating_accumulation() {
        // 0.1 is not exact in binary; ten steps must still land on 1.0
        let domain = Domain::new(unit(), unit(), 0.1, 1_000).unwrap();
        let xs = domain.x_coords();
        assert_eq!(xs.len(), 11);
        assert!((xs[10] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_interval_yields_one_point() {
        let point = Interval { min: 2.0, max: 2.0 };
        let domain = Domain::new(point, unit(), 0.5, 1_000).unwrap();
        assert_eq!(domain.x_coords(), vec![2.0]);
    }

    #[test]
    fn test_cell_budget_guard() {
        let wide = Interval {
            min: 0.0,
            max: 1_000.0,
        };
        let err = Domain::new(wide, wide, 0.5, 250_000).unwrap_err();
        assert!(matches!(err, GrapherError::DomainTooLarge { .. }));
    }

    #[test]
    fn test_nonpositive_step_is_structural() {
        let err = Domain::new(unit(), unit(), 0.0, 1_000).unwrap_err();
        assert!(matches!(err, GrapherError::GridGenerationFailed(_)));
        let err = Domain::new(unit(), unit(), -0.5, 1_000).unwrap_err();
        assert!(matches!(err, GrapherError::GridGenerationFailed(_)));
    }

    #[test]
    fn test_kind_target_ids_are_stable() {
        assert_eq!(SurfaceKind::Original.target_id(), "plot-original");
        assert_eq!(SurfaceKind::Dx.target_id(), "plot-dx");
        assert_eq!(SurfaceKind::Dy.target_id(), "plot-dy");
    }

    #[test]
    fn test_kind_parses_from_tab_name() {
        use std::str::FromStr;
        assert_eq!(SurfaceKind::from_str("original").unwrap(), SurfaceKind::Original);
        assert_eq!(SurfaceKind::from_str("dx").unwrap(), SurfaceKind::Dx);
        assert!(SurfaceKind::from_str("d2x").is_err());
    }
}
