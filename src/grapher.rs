//! # Grapher core
//! the surface-data generation and tab-synchronized rendering pipeline:
//! validated ranges -> shared sampling domain -> three height-field grids
//! (f, df/dx, df/dy) -> named surfaces handed to the render boundary under
//! stable target ids.

/// turns a textual "min,max" pair into a validated numeric interval
pub mod range_parser;
/// `Interval`, `Domain` with stepped coordinate generation and the cell
/// budget guard, `SurfaceGrid` and the tagged surface kinds
pub mod domain;
/// rectangular grid sampling with per-point failure tolerance
pub mod sampler;
/// orchestration of one plot cycle with its failure boundaries
pub mod pipeline;
/// per-session state, recompute triggers and the tab controller
pub mod session;
/// sampling and rendering parameters, with optional TOML loading
pub mod config;
mod pipeline_tests;
