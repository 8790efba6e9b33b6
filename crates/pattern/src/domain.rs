//! Domain-aware rewrites (Phase I start)
//!
//! Safe rules under assumptions::Context (symbol-level properties only):
//! - exp(ln(x)) -> x when x > 0 (x is a Symbol and Context says Positive)
//! - ln(x^n) -> n*ln(x) when x > 0 and n is an integer literal
//! - sqrt(x^2) -> x when x > 0
//!
//! Notes:
//! - We conservatively require `x` to be a single `Symbol` for property checks.
//! - We perform bottom-up rewriting and apply these top-level rules once per call.

use crate::ac::{match_expr, Pat};
use assumptions::{Context as AssumptionsContext, Prop, Truth};
use expr_core::{ExprId, Op, Payload, Store};

pub fn rewrite_domain(store: &mut Store, id: ExprId, ctx: &AssumptionsContext) -> ExprId {
    let rewritten = rewrite_children(store, id, ctx);
    if let Some(out) = try_rules(store, rewritten, ctx) {
        out
    } else {
        rewritten
    }
}

fn rewrite_children(store: &mut Store, id: ExprId, ctx: &AssumptionsContext) -> ExprId {
    match store.get(id).op {
        Op::Add => {
            let ch = store.get(id).children.clone();
            let mut v = Vec::with_capacity(ch.len());
            for c in ch {
                v.push(rewrite_domain(store, c, ctx));
            }
            store.add(v)
        }
        Op::Mul => {
            let ch = store.get(id).children.clone();
            let mut v = Vec::with_capacity(ch.len());
            for c in ch {
                v.push(rewrite_domain(store, c, ctx));
            }
            store.mul(v)
        }
        Op::Pow => {
            let base = store.get(id).children[0];
            let exp = store.get(id).children[1];
            let b = rewrite_domain(store, base, ctx);
            let e = rewrite_domain(store, exp, ctx);
            store.pow(b, e)
        }
        Op::Function => {
            let name = match &store.get(id).payload {
                Payload::Func(s) => s.clone(),
                _ => "<f>".into(),
            };
            let ch = store.get(id).children.clone();
            let mut v = Vec::with_capacity(ch.len());
            for c in ch {
                v.push(rewrite_domain(store, c, ctx));
            }
            store.func(name, v)
        }
        _ => id,
    }
}

fn symbol_name(store: &Store, id: ExprId) -> Option<&str> {
    let n = store.get(id);
    if let (Op::Symbol, Payload::Sym(name)) = (&n.op, &n.payload) {
        Some(name.as_str())
    } else {
        None
    }
}

fn is_positive_sym(store: &Store, id: ExprId, ctx: &AssumptionsContext) -> bool {
    if let Some(name) = symbol_name(store, id) {
        matches!(ctx.has(name, Prop::Positive), Truth::True)
    } else {
        false
    }
}

fn try_rules(store: &mut Store, id: ExprId, ctx: &AssumptionsContext) -> Option<ExprId> {
    // Rule: exp(ln(x)) -> x when x>0 (x is a single Symbol known positive)
    {
        let pat = Pat::Function(
            "exp".into(),
            vec![Pat::Function("ln".into(), vec![Pat::Any("x".into())])],
        );
        if let Some(b) = match_expr(store, &pat, id) {
            let x = *b.get("x").unwrap();
            if is_positive_sym(store, x, ctx) {
                return Some(x);
            }
        }
    }

    // Rule: ln(x^n) -> n*ln(x) when x>0 and n is integer
    {
        let pat = Pat::Function(
            "ln".into(),
            vec![Pat::Pow(Box::new(Pat::Any("x".into())), Box::new(Pat::Any("n".into())))],
        );
        if let Some(b) = match_expr(store, &pat, id) {
            let x = *b.get("x").unwrap();
            let n_id = *b.get("n").unwrap();
            // Extract integer exponent value first to end immutable borrow before mutating `store`.
            let k_opt = {
                let nnode = store.get(n_id);
                if let (Op::Integer, Payload::Int(k)) = (&nnode.op, &nnode.payload) {
                    Some(*k)
                } else {
                    None
                }
            };
            if let Some(k) = k_opt {
                if is_positive_sym(store, x, ctx) {
                    let ln_x = store.func("ln", vec![x]);
                    let coeff = store.int(k);
                    return Some(store.mul(vec![coeff, ln_x]));
                }
            }
        }
    }

    // Rule: sqrt(x^2) -> x when x>0
    {
        let pat = Pat::Function(
            "sqrt".into(),
            vec![Pat::Pow(Box::new(Pat::Any("x".into())), Box::new(Pat::Integer(2)))],
        );
        if let Some(b) = match_expr(store, &pat, id) {
            let x = *b.get("x").unwrap();
            if is_positive_sym(store, x, ctx) {
                return Some(x);
            }
        }
    }

    None
}
