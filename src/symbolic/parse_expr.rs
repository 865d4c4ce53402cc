//! a module turns a String expression into a symbolic expression
//!
//! The grammar is split recursively at the weakest binding operator that sits
//! outside any brackets: first the rightmost '+'/'-', then the rightmost
//! '*'/'/', then a unary sign, then the leftmost '^' (power is
//! right-associative), then function calls, bracketed groups and atoms.
//!
//! # Example
//! ```
//! use partial_grapher::symbolic::parse_expr::parse_expression;
//! let parsed = parse_expression("x^2 + sin(y)").unwrap();
//! println!("parsed expression {}", parsed);
//! ```

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{check_brackets, find_pair_to_this_bracket};

/// Parses a textual expression into an [`Expr`] tree.
pub fn parse_expression(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }
    check_brackets(input)?;
    parse_node(input)
}

// Rightmost occurrence of one of `operators` at bracket depth zero. A '+' or
// '-' directly after another operator or an opening bracket is a sign, not a
// binary operator; one sitting inside the exponent of a scientific literal
// like "1e-3" is part of the number. Both are skipped.
fn rightmost_operator_outside_brackets(input: &str, operators: &[char]) -> Option<(usize, char)> {
    let mut depth = 0;
    let mut prev: Option<char> = None;
    let mut prev2: Option<char> = None;
    let mut found = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 && operators.contains(&c) => {
                let after_operator = !matches!(prev, Some(p) if !"+-*/^(".contains(p));
                let in_exponent = matches!(prev, Some('e') | Some('E'))
                    && matches!(prev2, Some(p) if p.is_ascii_digit() || p == '.');
                let is_sign = matches!(c, '+' | '-') && (after_operator || in_exponent);
                if !is_sign {
                    found = Some((i, c));
                }
            }
            _ => {}
        }
        if !c.is_whitespace() {
            prev2 = prev;
            prev = Some(c);
        }
    }
    found
}

// Leftmost '^' at bracket depth zero; power chains associate to the right.
fn leftmost_power_outside_brackets(input: &str) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '^' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_node(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty (sub)expression".to_string());
    }

    // addition and subtraction
    if let Some((pos, op)) = rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = parse_node(&input[..pos])?;
        let right = parse_operand(&input[pos + 1..], op)?;
        return Ok(match op {
            '+' => Expr::Add(left.boxed(), right.boxed()),
            _ => Expr::Sub(left.boxed(), right.boxed()),
        });
    }

    // multiplication and division
    if let Some((pos, op)) = rightmost_operator_outside_brackets(input, &['*', '/']) {
        if input[..pos].trim().is_empty() {
            return Err(format!("missing operand before '{}'", op));
        }
        let left = parse_node(&input[..pos])?;
        let right = parse_operand(&input[pos + 1..], op)?;
        return Ok(match op {
            '*' => Expr::Mul(left.boxed(), right.boxed()),
            _ => Expr::Div(left.boxed(), right.boxed()),
        });
    }

    // unary sign binds looser than '^': -x^2 is -(x^2)
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(-parse_node(rest)?);
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_node(rest);
    }

    // exponentiation
    if let Some(pos) = leftmost_power_outside_brackets(input) {
        if input[..pos].trim().is_empty() {
            return Err("missing base before '^'".to_string());
        }
        let base = parse_node(&input[..pos])?;
        let exponent = parse_operand(&input[pos + 1..], '^')?;
        return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
    }

    // function calls: the whole node is name(...)
    if let Some(open) = input.find('(') {
        let name = input[..open].trim();
        let is_name = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic());
        if is_name {
            match find_pair_to_this_bracket(input, open) {
                Some(close) if close == input.len() - 1 => {
                    let inner = parse_node(&input[open + 1..close])?;
                    return match name {
                        "exp" => Ok(Expr::Exp(inner.boxed())),
                        "ln" | "log" => Ok(Expr::Ln(inner.boxed())),
                        "sin" => Ok(Expr::sin(inner.boxed())),
                        "cos" => Ok(Expr::cos(inner.boxed())),
                        "tg" | "tan" => Ok(Expr::tg(inner.boxed())),
                        "sqrt" => Ok(inner.pow(Expr::Const(0.5))),
                        _ => Err(format!("unknown function '{}'", name)),
                    };
                }
                _ => return Err(format!("malformed call to '{}'", name)),
            }
        }
    }

    // a group that is all in brackets
    if input.starts_with('(') && find_pair_to_this_bracket(input, 0) == Some(input.len() - 1) {
        return parse_node(&input[1..input.len() - 1]);
    }

    // constants and variables
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }
    let mut chars = input.chars();
    let is_ident = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if is_ident {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("invalid expression fragment '{}'", input))
}

fn parse_operand(input: &str, op: char) -> Result<Expr, String> {
    if input.trim().is_empty() {
        return Err(format!("missing operand after '{}'", op));
    }
    parse_node(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_expression("1e-3").unwrap(), Expr::Const(1e-3));
        assert_eq!(parse_expression("2.5e+2").unwrap(), Expr::Const(250.0));
        // the literal's exponent sign does not shadow real operators
        let expr = parse_expression("x - 1e-3").unwrap();
        assert_eq!(
            expr,
            Expr::Sub(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(1e-3))
            )
        );
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_exponential() {
        let expr = parse_expression("exp(x)").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_logarithm() {
        let expr = parse_expression("log(x)").unwrap();
        assert_eq!(expr, Expr::Ln(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_with_brackets() {
        let expr = parse_expression("(x + y) * x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_multiple_subtraction_is_left_associative() {
        let expr = parse_expression("x^2 - x - 1").unwrap();
        let x = Expr::Var("x".to_string());
        let expected = x.clone().pow(Expr::Const(2.0)) - x - Expr::Const(1.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse_expression("x^2^3").unwrap();
        let x = Expr::Var("x".to_string());
        assert_eq!(expr, x.pow(Expr::Const(2.0).pow(Expr::Const(3.0))));
    }

    #[test]
    fn test_unary_minus() {
        let expr = parse_expression("-x^2").unwrap();
        let x = Expr::Var("x".to_string());
        assert_eq!(expr, -(x.pow(Expr::Const(2.0))));
    }

    #[test]
    fn test_negative_exponent() {
        // the '-' after '^' is a sign, not a binary operator
        let expr = parse_expression("x^-2").unwrap();
        let x = Expr::Var("x".to_string());
        assert_eq!(expr, x.pow(-Expr::Const(2.0)));
    }

    #[test]
    fn test_parse_nested_trig() {
        let expr = parse_expression("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_parse_complex_trig() {
        let expr = parse_expression("sin(x) + cos(y)").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::sin(Box::new(Expr::Var("x".to_string())))),
                Box::new(Expr::cos(Box::new(Expr::Var("y".to_string()))))
            )
        );
    }

    #[test]
    fn test_sqrt_becomes_half_power() {
        let expr = parse_expression("sqrt(x)").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()).pow(Expr::Const(0.5)));
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression("x +* y").is_err());
        assert!(parse_expression("(x +").is_err());
        assert!(parse_expression("").is_err());
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression("(x + y").is_err());
        assert!(parse_expression("x + y)").is_err());
    }

    #[test]
    fn test_unknown_function() {
        assert!(parse_expression("sinh(x)").is_err());
    }
}
