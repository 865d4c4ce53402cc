//! # Render boundary
//! the external plotting capability as the pipeline sees it: a
//! `SurfaceRenderer` accepts a frame {target id, title, color scheme, grid}
//! and draws or updates a 3D surface in place at that target. Two backends
//! are on board, plotters and gnuplot; acquisition of a backend is lazy and
//! memoized per session.

/// the `SurfaceRenderer` contract, render frames and color schemes
pub mod frame;
/// 3D surface drawing with the plotters crate (default backend)
pub mod plotters3d;
/// 3D surface drawing through gnuplot
pub mod gnuplot3d;
/// lazy idempotent backend acquisition
pub mod runtime;

pub use frame::{ColorScheme, RenderFrame, SurfaceRenderer};
pub use runtime::RenderRuntime;
