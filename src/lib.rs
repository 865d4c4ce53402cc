#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
//! Core of an interactive 3D grapher for a function of two variables.
//!
//! The crate turns a textual expression f(x,y) and two "min,max" ranges into
//! three sampled height-field grids - the function itself and its partial
//! derivatives with respect to x and y - and keeps them consistent across a
//! tabbed view. Per-point evaluation failures (division by zero, log of a
//! negative) become NaN cells instead of aborting the whole grid.
pub mod Utils;
pub mod error;
pub mod grapher;
pub mod render;
pub mod symbolic;
