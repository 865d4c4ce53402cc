//! The contract surface between the symbolic engine and the plot pipeline:
//! `compile` a textual expression into a fast numeric evaluator,
//! `differentiate` it symbolically into the textual form of a derivative,
//! and evaluate per point with per-call failure. Downstream code depends on
//! this module only, never on the `Expr` tree.

use crate::error::{EvalFailure, GrapherError};
use crate::symbolic::parse_expr::parse_expression;
use crate::symbolic::symbolic_engine::Expr;
use std::fmt;

/// Per-point evaluation over the (x, y) plane. The sampling loop and the
/// tests talk to evaluators through this trait, so a counting or failing
/// stand-in can replace a compiled expression.
pub trait Evaluate {
    fn evaluate(&self, x: f64, y: f64) -> Result<f64, EvalFailure>;
}

impl<F> Evaluate for F
where
    F: Fn(f64, f64) -> Result<f64, EvalFailure>,
{
    fn evaluate(&self, x: f64, y: f64) -> Result<f64, EvalFailure> {
        self(x, y)
    }
}

/// A compiled expression: the source text plus a closure generated from the
/// expression tree. Owned by the pipeline for the duration of one plot cycle.
pub struct CompiledExpression {
    source: String,
    func: Box<dyn Fn(f64, f64) -> f64 + Send + Sync>,
}

impl CompiledExpression {
    pub fn source(&self) -> &str {
        &self.source
    }
}

// the generated closure has no useful Debug form, the source text does
impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl Evaluate for CompiledExpression {
    /// Evaluates at one point. f64 arithmetic never throws; a domain error
    /// (division by zero, log of a negative) shows up as a non-finite value
    /// and is reported as a per-call failure for the caller to swallow.
    fn evaluate(&self, x: f64, y: f64) -> Result<f64, EvalFailure> {
        let value = (self.func)(x, y);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalFailure { x, y })
        }
    }
}

/// Compiles a textual expression in the free variables x and y.
///
/// Any other free variable is rejected here rather than at evaluation time,
/// so the generated closure needs no name lookup per call.
pub fn compile(text: &str) -> Result<CompiledExpression, GrapherError> {
    let expr = parse_expression(text).map_err(GrapherError::InvalidExpression)?;
    if let Some(bad) = expr
        .extract_variables()
        .into_iter()
        .find(|name| name != "x" && name != "y")
    {
        return Err(GrapherError::InvalidExpression(format!(
            "unknown variable '{}' (only x and y are allowed)",
            bad
        )));
    }
    Ok(CompiledExpression {
        source: text.trim().to_string(),
        func: expr.lambdify_xy(),
    })
}

/// Symbolically differentiates `text` with respect to `var` and returns the
/// simplified textual form of the derivative, ready for display and for a
/// second `compile`.
pub fn differentiate(text: &str, var: &str) -> Result<String, GrapherError> {
    let expr =
        parse_expression(text).map_err(GrapherError::DifferentiationFailed)?;
    Ok(expr.diff(var).simplify_().to_string())
}

impl Expr {
    /// Converts the expression tree into an executable closure of (x, y).
    ///
    /// The closure mirrors the tree: every node becomes a boxed closure over
    /// its children, so there is no parsing or interpretation per call.
    /// Variables other than x and y must have been rejected beforehand;
    /// any stray name falls back to the y slot.
    pub fn lambdify_xy(&self) -> Box<dyn Fn(f64, f64) -> f64 + Send + Sync> {
        match self {
            Expr::Var(name) => {
                if name == "x" {
                    Box::new(|x, _| x)
                } else {
                    Box::new(|_, y| y)
                }
            }
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_, _| val)
            }
            Expr::Add(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify_xy(), rhs.lambdify_xy());
                Box::new(move |x, y| lf(x, y) + rf(x, y))
            }
            Expr::Sub(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify_xy(), rhs.lambdify_xy());
                Box::new(move |x, y| lf(x, y) - rf(x, y))
            }
            Expr::Mul(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify_xy(), rhs.lambdify_xy());
                Box::new(move |x, y| lf(x, y) * rf(x, y))
            }
            Expr::Div(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify_xy(), rhs.lambdify_xy());
                Box::new(move |x, y| lf(x, y) / rf(x, y))
            }
            Expr::Pow(base, exp) => {
                let (bf, ef) = (base.lambdify_xy(), exp.lambdify_xy());
                Box::new(move |x, y| bf(x, y).powf(ef(x, y)))
            }
            Expr::Exp(expr) => {
                let f = expr.lambdify_xy();
                Box::new(move |x, y| f(x, y).exp())
            }
            Expr::Ln(expr) => {
                let f = expr.lambdify_xy();
                Box::new(move |x, y| f(x, y).ln())
            }
            Expr::sin(expr) => {
                let f = expr.lambdify_xy();
                Box::new(move |x, y| f(x, y).sin())
            }
            Expr::cos(expr) => {
                let f = expr.lambdify_xy();
                Box::new(move |x, y| f(x, y).cos())
            }
            Expr::tg(expr) => {
                let f = expr.lambdify_xy();
                Box::new(move |x, y| f(x, y).tan())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compile_and_evaluate() {
        let f = compile("x^2 + y^2").unwrap();
        assert_relative_eq!(f.evaluate(3.0, 4.0).unwrap(), 25.0);
        assert_eq!(f.source(), "x^2 + y^2");
        assert!(format!("{:?}", f).contains("x^2 + y^2"));
    }

    #[test]
    fn test_compile_rejects_malformed_syntax() {
        let err = compile("x +* y").unwrap_err();
        assert!(matches!(err, GrapherError::InvalidExpression(_)));
    }

    #[test]
    fn test_compile_rejects_foreign_variables() {
        let err = compile("x + z").unwrap_err();
        match err {
            GrapherError::InvalidExpression(msg) => assert!(msg.contains("'z'")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_reports_domain_failure_per_call() {
        let f = compile("1 / x").unwrap();
        assert_eq!(f.evaluate(0.0, 0.0), Err(EvalFailure { x: 0.0, y: 0.0 }));
        assert_relative_eq!(f.evaluate(2.0, 0.0).unwrap(), 0.5);

        let g = compile("ln(x)").unwrap();
        assert!(g.evaluate(-1.0, 0.0).is_err());
    }

    #[test]
    fn test_differentiate_returns_compilable_text() {
        let dx = differentiate("x^2 + y^2", "x").unwrap();
        let dx_f = compile(&dx).unwrap();
        assert_relative_eq!(dx_f.evaluate(3.0, 9.0).unwrap(), 6.0);

        let dy = differentiate("x^2 + y^2", "y").unwrap();
        let dy_f = compile(&dy).unwrap();
        assert_relative_eq!(dy_f.evaluate(3.0, 9.0).unwrap(), 18.0);
    }

    #[test]
    fn test_differentiate_transcendental() {
        let dx = differentiate("sin(x) * exp(y)", "x").unwrap();
        let f = compile(&dx).unwrap();
        assert_relative_eq!(
            f.evaluate(0.5, 1.2).unwrap(),
            0.5_f64.cos() * 1.2_f64.exp(),
            epsilon = 1e-12
        );
    }
}
