//! # Symbolic engine
//! the self-contained symbolic-math capability the plot pipeline consumes:
//! 1) turns a String expression into a symbolic expression
//! 2) computes analytical partial derivatives
//! 3) turns a symbolic expression into a regular Rust function of (x, y)
//!
//! The rest of the crate talks to this module only through
//! [`expression_engine`]: `compile`, `differentiate` and the `Evaluate`
//! contract. Nothing downstream matches on the AST.
//!
//! # Example
//! ```
//! use partial_grapher::symbolic::expression_engine::{compile, differentiate, Evaluate};
//! let f = compile("x^2 + y^2").unwrap();
//! assert_eq!(f.evaluate(2.0, 3.0).unwrap(), 13.0);
//! let dx = differentiate("x^2 + y^2", "x").unwrap();
//! let dx_f = compile(&dx).unwrap();
//! assert_eq!(dx_f.evaluate(2.0, 0.0).unwrap(), 4.0);
//! ```

/// string expression -> symbolic expression, by recursive splitting at the
/// weakest operator outside brackets
pub mod parse_expr;
/// the `Expr` tree itself with Display and the std::ops overloads
pub mod symbolic_engine;
/// analytical differentiation rules
pub mod symbolic_derivatives;
/// algebraic cleanup of derivative trees so their textual form is readable
pub mod symbolic_simplify;
/// the contract surface consumed by the pipeline: compile / differentiate /
/// evaluate with per-call failure
pub mod expression_engine;
/// bracket-scanning helpers shared by the parser
pub mod utils;
