//! Canonical textual forms: numbers with no trailing zeros or `+` sign, and
//! formula reprints with minimal parentheses.

use crate::ast::{Expr, Precedence};

/// Canonical decimal form of a finite number: no trailing zeros, no
/// trailing `.`, no leading `+`. `-0.0` formats as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let mut buf = ryu::Buffer::new();
    let printed = buf.format_finite(n);
    // ryu always emits a decimal point; trim a superfluous trailing zero
    // (e.g. "1.50" would already be "1.5", but guard anyway).
    let trimmed = printed.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    trimmed.to_string()
}

/// The unique minimal-parenthesisation reprint of `expr`.
pub fn print(expr: &Expr) -> String {
    render(expr, Precedence::Additive, false, true)
}

fn render(expr: &Expr, floor: Precedence, strict: bool, allow_unary: bool) -> String {
    let prec = expr.precedence();
    let mut needs_parens = if strict { prec <= floor } else { prec < floor };
    if matches!(expr, Expr::Neg(_)) && !allow_unary {
        needs_parens = true;
    }

    let body = match expr {
        Expr::Number(n) => format_number(*n),
        Expr::Ref(pos) => pos.format(),
        Expr::Neg(inner) => format!("-{}", render(inner, Precedence::Unary, false, true)),
        Expr::Add(l, r) => format!(
            "{}+{}",
            render(l, Precedence::Additive, false, allow_unary),
            render(r, Precedence::Additive, true, false)
        ),
        Expr::Sub(l, r) => format!(
            "{}-{}",
            render(l, Precedence::Additive, false, allow_unary),
            render(r, Precedence::Additive, true, false)
        ),
        Expr::Mul(l, r) => format!(
            "{}*{}",
            render(l, Precedence::Multiplicative, false, allow_unary),
            render(r, Precedence::Multiplicative, true, false)
        ),
        Expr::Div(l, r) => format!(
            "{}/{}",
            render(l, Precedence::Multiplicative, false, allow_unary),
            render(r, Precedence::Multiplicative, true, false)
        ),
    };

    if needs_parens {
        format!("({body})")
    } else {
        body
    }
}
