//! # Symbolic Derivatives Module
//!
//! Analytical differentiation of [`Expr`] trees by recursive application of
//! the calculus rules: linearity, product rule, quotient rule and the chain
//! rule for the function variants. For a power `b^e` two cases are
//! distinguished: when the exponent does not contain the differentiation
//! variable the plain power rule applies, otherwise the general exponential
//! rule d(b^e) = b^e * (e' * ln(b) + e * b'/b).

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Computes the analytical partial derivative with respect to `var`.
    ///
    /// # Examples
    /// ```
    /// use partial_grapher::symbolic::parse_expr::parse_expression;
    /// let f = parse_expression("x^2 + y^2").unwrap();
    /// let df_dx = f.diff("x").simplify_();
    /// println!("df_dx = {}", df_dx);
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            // product rule: f'*g + f*g'
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            // quotient rule: (f'*g - g'*f) / g^2
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if !exp.contains_variable(var) {
                    // power rule: e * b^(e-1) * b'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                } else {
                    // general rule: b^e * (e' * ln(b) + e * b'/b)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            // d(tg u) = u' / cos(u)^2
            Expr::tg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Mul(
                    Box::new(Expr::cos(expr.clone())),
                    Box::new(Expr::cos(expr.clone())),
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::parse_expr::parse_expression;
    use approx::assert_relative_eq;

    fn eval(expr: &Expr, x: f64, y: f64) -> f64 {
        expr.lambdify_xy()(x, y)
    }

    #[test]
    fn test_diff_power_rule() {
        let f = parse_expression("x^2").unwrap();
        let df = f.diff("x");
        assert_relative_eq!(eval(&df, 3.0, 0.0), 6.0);
        assert_relative_eq!(eval(&df, -1.5, 0.0), -3.0);
    }

    #[test]
    fn test_diff_partial_holds_other_variable_fixed() {
        let f = parse_expression("x^2 + y^2").unwrap();
        assert_relative_eq!(eval(&f.diff("x"), 2.0, 7.0), 4.0);
        assert_relative_eq!(eval(&f.diff("y"), 2.0, 7.0), 14.0);
    }

    #[test]
    fn test_diff_product_rule() {
        let f = parse_expression("x * sin(x)").unwrap();
        let df = f.diff("x");
        let x = 1.3;
        assert_relative_eq!(eval(&df, x, 0.0), x.cos() * x + x.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_diff_quotient_rule() {
        let f = parse_expression("x / y").unwrap();
        assert_relative_eq!(eval(&f.diff("y"), 2.0, 4.0), -2.0 / 16.0);
    }

    #[test]
    fn test_diff_chain_rule() {
        let f = parse_expression("exp(x^2)").unwrap();
        let df = f.diff("x");
        let x = 0.7;
        assert_relative_eq!(
            eval(&df, x, 0.0),
            2.0 * x * (x * x).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diff_general_power() {
        // d/dx x^x = x^x * (ln x + 1)
        let f = parse_expression("x^x").unwrap();
        let df = f.diff("x");
        let x = 2.5;
        assert_relative_eq!(
            eval(&df, x, 0.0),
            x.powf(x) * (x.ln() + 1.0),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_diff_ln_and_tg() {
        let f = parse_expression("ln(x)").unwrap();
        assert_relative_eq!(eval(&f.diff("x"), 4.0, 0.0), 0.25);
        let g = parse_expression("tg(x)").unwrap();
        let x = 0.3;
        assert_relative_eq!(
            eval(&g.diff("x"), x, 0.0),
            1.0 / (x.cos() * x.cos()),
            epsilon = 1e-12
        );
    }
}
