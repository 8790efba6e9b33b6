//! Rewrite scheduler v0
//! - Applies rewrite_basic repeatedly up to a step cap (termination guard)
//! - Returns final ExprId and basic stats

use crate::rewrite::rewrite_basic;
use expr_core::{ExprId, Store};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteStats {
    pub steps: usize,
    pub changed: bool,
    pub nodes_before: usize,
    pub nodes_after: usize,
}

/// Apply `rewrite_basic` repeatedly until a fixpoint is reached or `max_steps` is hit.
/// Returns (final_expr, stats).
pub fn rewrite_fixpoint(store: &mut Store, id: ExprId, max_steps: usize) -> (ExprId, RewriteStats) {
    let before = count_nodes(store, id);
    if max_steps == 0 {
        return (
            id,
            RewriteStats { steps: 0, changed: false, nodes_before: before, nodes_after: before },
        );
    }

    let mut cur = id;
    let mut steps = 0;
    loop {
        if steps >= max_steps {
            let after = count_nodes(store, cur);
            return (
                cur,
                RewriteStats {
                    steps,
                    changed: cur != id,
                    nodes_before: before,
                    nodes_after: after,
                },
            );
        }
        let next = rewrite_basic(store, cur);
        steps += 1;
        if next == cur {
            let after = count_nodes(store, cur);
            return (
                cur,
                RewriteStats {
                    steps,
                    changed: cur != id,
                    nodes_before: before,
                    nodes_after: after,
                },
            );
        }
        cur = next;
    }
}

fn count_nodes(store: &Store, id: ExprId) -> usize {
    let mut seen: HashSet<ExprId> = HashSet::new();
    let mut stack = vec![id];
    while let Some(nid) = stack.pop() {
        if !seen.insert(nid) {
            continue;
        }
        let node = store.get(nid);
        for &c in &node.children {
            stack.push(c);
        }
    }
    seen.len()
}
