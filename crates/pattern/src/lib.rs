#![deny(warnings)]
//! pattern v1: basic substitution utilities.
//! - Substitute a symbol with an expression throughout a tree.

pub mod ac;
pub mod domain;
pub mod pipeline;
pub mod registry;
pub mod rewrite;
pub mod scheduler;

use expr_core::{ExprId, Op, Payload, Store};

/// Substitute all occurrences of symbol `sym` with `with_expr` inside `id`.
/// Does not recurse into `with_expr` (it is inserted as-is).
/// Results are memoized in the store to avoid redundant computation.
pub fn subst_symbol(store: &mut Store, id: ExprId, sym: &str, with_expr: ExprId) -> ExprId {
    // Check memoization cache first
    if let Some(cached) = store.get_subst_cached(id, sym, with_expr) {
        return cached;
    }

    // Compute the substitution
    let result = subst_symbol_impl(store, id, sym, with_expr);

    // Cache the result before returning
    store.cache_subst(id, sym.to_string(), with_expr, result);
    result
}

/// Internal substitution implementation (without memoization)
fn subst_symbol_impl(store: &mut Store, id: ExprId, sym: &str, with_expr: ExprId) -> ExprId {
    match store.get(id).op {
        Op::Integer | Op::Rational => id,
        Op::Symbol => match &store.get(id).payload {
            Payload::Sym(s) if s == sym => with_expr,
            _ => id,
        },
        Op::Add => {
            let children = store.get(id).children.clone();
            let mapped = children
                .into_iter()
                .map(|c| subst_symbol(store, c, sym, with_expr))
                .collect::<Vec<_>>();
            store.add(mapped)
        }
        Op::Mul => {
            let children = store.get(id).children.clone();
            let mapped = children
                .into_iter()
                .map(|c| subst_symbol(store, c, sym, with_expr))
                .collect::<Vec<_>>();
            store.mul(mapped)
        }
        Op::Pow => {
            let (b_id, e_id) = {
                let n = store.get(id);
                (n.children[0], n.children[1])
            };
            let b = subst_symbol(store, b_id, sym, with_expr);
            let e = subst_symbol(store, e_id, sym, with_expr);
            store.pow(b, e)
        }
        Op::Function => {
            let name = match &store.get(id).payload {
                Payload::Func(s) => s.clone(),
                _ => "<f>".into(),
            };
            let children = store.get(id).children.clone();
            let mapped = children
                .into_iter()
                .map(|c| subst_symbol(store, c, sym, with_expr))
                .collect::<Vec<_>>();
            store.func(name, mapped)
        }
        Op::Piecewise => {
            let children = store.get(id).children.clone();
            let mapped = children
                .into_iter()
                .map(|c| subst_symbol(store, c, sym, with_expr))
                .collect::<Vec<_>>();
            // Rebuild as pairs
            let mut pairs = Vec::new();
            for chunk in mapped.chunks(2) {
                if chunk.len() == 2 {
                    pairs.push((chunk[0], chunk[1]));
                }
            }
            store.piecewise(pairs)
        }
    }
}
