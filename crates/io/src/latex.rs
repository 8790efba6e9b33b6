//! LaTeX printer for Symmetrica expressions.
//! Minimal, deterministic, precedence-aware pretty printer.

use expr_core::{ExprId, Op, Payload, Store};

/// Convert an expression to a LaTeX string.
pub fn to_latex(st: &Store, id: ExprId) -> String {
    fn prec(op: &Op) -> u8 {
        match op {
            Op::Add => 1,
            Op::Mul => 2,
            Op::Pow => 3,
            _ => 4,
        }
    }
    fn needs_paren(child_op: &Op, parent_prec: u8) -> bool {
        prec(child_op) < parent_prec
    }
    fn esc_ident(s: &str) -> String {
        // Minimal escaping for LaTeX: underscore is common in identifiers
        s.replace('_', "\\_")
    }
    fn mul_join(parts: Vec<String>) -> String {
        parts.join(" \\cdot ")
    }

    fn go(st: &Store, id: ExprId, parent_prec: u8) -> String {
        let n = st.get(id);
        let s = match (&n.op, &n.payload) {
            (Op::Integer, Payload::Int(k)) => k.to_string(),
            (Op::Rational, Payload::Rat(a, b)) => format!("\\frac{{{}}}{{{}}}", a, b),
            (Op::Symbol, Payload::Sym(name)) => esc_ident(name),
            (Op::Function, Payload::Func(name)) => {
                let head = match name.as_str() {
                    "sin" => "\\sin",
                    "cos" => "\\cos",
                    "exp" => "\\exp",
                    "ln" => "\\ln",
                    _ => name,
                };
                let args = n.children.iter().map(|c| go(st, *c, 0)).collect::<Vec<_>>().join(", ");
                format!("{}({})", head, args)
            }
            (Op::Add, _) => n
                .children
                .iter()
                .map(|c| go(st, *c, prec(&Op::Add)))
                .collect::<Vec<_>>()
                .join(" + "),
            (Op::Mul, _) => {
                let parts = n
                    .children
                    .iter()
                    .map(|c| {
                        let cn = st.get(*c);
                        // Call child with neutral precedence and parenthesize manually when needed
                        let inner = go(st, *c, 0);
                        if matches!(cn.op, Op::Add) {
                            format!("({})", inner)
                        } else {
                            inner
                        }
                    })
                    .collect::<Vec<_>>();
                mul_join(parts)
            }
            (Op::Pow, _) => {
                // base^{exp}, parenthesize base if needed
                let b_id = n.children[0];
                let e_id = n.children[1];
                let b_node = st.get(b_id);
                // Use neutral precedence and add parentheses manually if required
                let base_s = go(st, b_id, 0);
                let base = if needs_paren(&b_node.op, prec(&Op::Pow)) {
                    format!("({})", base_s)
                } else {
                    base_s
                };
                let exp = go(st, e_id, 0);
                format!("{}^{{{}}}", base, exp)
            }
            _ => "<unknown>".into(),
        };
        if prec(&n.op) < parent_prec {
            format!("({})", s)
        } else {
            s
        }
    }
    go(st, id, 0)
}
