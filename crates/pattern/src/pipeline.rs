//! Rewrite pipeline: combine core passes under a step cap.
//! Order per iteration: rewrite_basic -> domain -> registry (best by node count) -> simplify_with.

use crate::{
    domain::rewrite_domain,
    registry::{apply_best_rule_by_node_count, Rule},
    rewrite::rewrite_basic,
};
use assumptions::Context as AssumptionsContext;
use expr_core::{ExprId, Store};

/// Run the composite rewrite pipeline with a maximum number of iterations.
/// Returns the final expression (canonicalized via simplify_with in each iteration).
pub fn rewrite_pipeline(
    store: &mut Store,
    id: ExprId,
    ctx: &AssumptionsContext,
    rules: &[Rule],
    max_steps: usize,
) -> ExprId {
    if max_steps == 0 {
        return id;
    }
    let mut cur = id;
    for _ in 0..max_steps {
        let a = rewrite_basic(store, cur);
        let b = rewrite_domain(store, a, ctx);
        let c = match apply_best_rule_by_node_count(store, b, rules) {
            Some(n) => n,
            None => b,
        };
        let d = simplify::simplify_with(store, c, ctx);
        if d == cur {
            return d;
        }
        cur = d;
    }
    cur
}
