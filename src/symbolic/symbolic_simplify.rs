//! algebraic cleanup of expression trees
//!
//! Differentiation produces trees full of `* 1`, `+ 0` and constant
//! subexpressions. The derivative text is shown to the user and recompiled,
//! so a recursive pass folds the obvious identities first.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Simplifies the expression by constant folding and the identity rules
    /// x+0, x-0, x*0, x*1, x/1, x^0, x^1, exp(0), ln(1). Applied bottom-up,
    /// one full pass.
    pub fn simplify_(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (_, Expr::Const(b)) if *b == 0.0 => l,
                    (Expr::Const(a), _) if *a == 0.0 => r,
                    _ => Expr::Add(l.boxed(), r.boxed()),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => l,
                    _ => Expr::Sub(l.boxed(), r.boxed()),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 1.0 => r,
                    (_, Expr::Const(b)) if *b == 1.0 => l,
                    _ => Expr::Mul(l.boxed(), r.boxed()),
                }
            }
            Expr::Div(lhs, rhs) => {
                let (l, r) = (lhs.simplify_(), rhs.simplify_());
                match (&l, &r) {
                    (Expr::Const(a), _) if *a == 0.0 && !r.is_zero() => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 1.0 => l,
                    _ => Expr::Div(l.boxed(), r.boxed()),
                }
            }
            Expr::Pow(base, exp) => {
                let (b, e) = (base.simplify_(), exp.simplify_());
                match (&b, &e) {
                    (_, Expr::Const(n)) if *n == 0.0 => Expr::Const(1.0),
                    (_, Expr::Const(n)) if *n == 1.0 => b,
                    (Expr::Const(a), Expr::Const(n)) => Expr::Const(a.powf(*n)),
                    _ => Expr::Pow(b.boxed(), e.boxed()),
                }
            }
            Expr::Exp(expr) => {
                let inner = expr.simplify_();
                if inner.is_zero() {
                    Expr::Const(1.0)
                } else {
                    Expr::Exp(inner.boxed())
                }
            }
            Expr::Ln(expr) => {
                let inner = expr.simplify_();
                match inner {
                    Expr::Const(v) if v == 1.0 => Expr::Const(0.0),
                    _ => Expr::Ln(inner.boxed()),
                }
            }
            Expr::sin(expr) => Expr::sin(expr.simplify_().boxed()),
            Expr::cos(expr) => Expr::cos(expr.simplify_().boxed()),
            Expr::tg(expr) => Expr::tg(expr.simplify_().boxed()),
        }
    }
}
