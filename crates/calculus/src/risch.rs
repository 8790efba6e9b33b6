//! Risch algorithm foundation for symbolic integration (v1.1)
//!
//! This module provides the groundwork for the Risch algorithm, including:
//! - Differential field tower representation
//! - Tower extension detection (exp/log structures)
//! - Logarithmic derivative computation
//!
//! The Risch algorithm is a decision procedure for symbolic integration of
//! elementary functions. This implementation focuses on exponential extensions
//! as a foundation for more advanced integration.

use crate::diff::diff;
use expr_core::{ExprId, Op, Payload, Store};

/// Represents the type of tower extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionType {
    /// Exponential extension: t = exp(u) where u is in the base field
    Exponential(ExprId), // stores u
    /// Logarithmic extension: t = ln(u) where u is in the base field
    Logarithmic(ExprId), // stores u
    /// No extension (base field element)
    Base,
}

/// A differential field tower element
#[derive(Debug, Clone)]
pub struct TowerElement {
    /// The expression itself
    pub expr: ExprId,
    /// The type of extension this represents
    pub extension: ExtensionType,
    /// Derivative with respect to the variable
    pub derivative: Option<ExprId>,
}

/// Analyzes an expression to determine its tower structure
///
/// Returns the extension type if the expression is exp(u) or ln(u)
/// for some simpler expression u.
pub fn detect_extension(store: &Store, expr: ExprId, var: &str) -> ExtensionType {
    match store.get(expr).op {
        Op::Function => {
            if let Payload::Func(fname) = &store.get(expr).payload {
                let children = &store.get(expr).children;
                if children.len() == 1 {
                    let arg = children[0];
                    match fname.as_str() {
                        "exp" => {
                            // Check if argument depends on var
                            if depends_on_var(store, arg, var) {
                                return ExtensionType::Exponential(arg);
                            }
                        }
                        "ln" | "log" => {
                            // Check if argument depends on var
                            if depends_on_var(store, arg, var) {
                                return ExtensionType::Logarithmic(arg);
                            }
                        }
                        _ => {}
                    }
                }
            }
            ExtensionType::Base
        }
        _ => ExtensionType::Base,
    }
}

/// Helper: checks if an expression depends on the given variable
fn depends_on_var(store: &Store, expr: ExprId, var: &str) -> bool {
    match (&store.get(expr).op, &store.get(expr).payload) {
        (Op::Symbol, Payload::Sym(s)) => s == var,
        (Op::Integer, _) | (Op::Rational, _) => false,
        _ => store.get(expr).children.iter().any(|&c| depends_on_var(store, c, var)),
    }
}

/// Computes the logarithmic derivative of an expression: d/dx(ln(f)) = f'/f
///
/// This is a key operation in the Risch algorithm for handling exponential
/// and logarithmic functions.
///
/// Returns None if the derivative cannot be computed or the expression is zero.
pub fn logarithmic_derivative(store: &mut Store, expr: ExprId, var: &str) -> Option<ExprId> {
    // Compute f'
    let derivative = diff(store, expr, var);

    // Return f'/f = f' * f^(-1)
    let minus_one = store.int(-1);
    let inv_expr = store.pow(expr, minus_one);
    Some(store.mul(vec![derivative, inv_expr]))
}

/// Checks if an expression is in exponential normal form: exp(u)
///
/// Returns Some(u) if expr = exp(u), None otherwise
pub fn is_exponential(store: &Store, expr: ExprId) -> Option<ExprId> {
    match store.get(expr).op {
        Op::Function => {
            if let Payload::Func(fname) = &store.get(expr).payload {
                if fname == "exp" && store.get(expr).children.len() == 1 {
                    return Some(store.get(expr).children[0]);
                }
            }
            None
        }
        _ => None,
    }
}

/// Checks if an expression is in logarithmic normal form: ln(u)
///
/// Returns Some(u) if expr = ln(u), None otherwise
pub fn is_logarithm(store: &Store, expr: ExprId) -> Option<ExprId> {
    match store.get(expr).op {
        Op::Function => {
            if let Payload::Func(fname) = &store.get(expr).payload {
                if (fname == "ln" || fname == "log") && store.get(expr).children.len() == 1 {
                    return Some(store.get(expr).children[0]);
                }
            }
            None
        }
        _ => None,
    }
}

/// Attempts to integrate simple exponential expressions using Risch principles
///
/// Handles patterns like:
/// - ∫ exp(x) dx = exp(x)
/// - ∫ exp(ax) dx = (1/a) exp(ax)
/// - ∫ exp(ax + b) dx = (1/a) exp(ax + b)
pub fn try_integrate_exponential(store: &mut Store, expr: ExprId, var: &str) -> Option<ExprId> {
    // Check if this is exp(u)
    let u = is_exponential(store, expr)?;

    // Compute du/dx
    let du = diff(store, u, var);

    // Check if du is a constant
    match (&store.get(du).op, &store.get(du).payload) {
        (Op::Integer, Payload::Int(0)) => {
            // du/dx = 0, so exp(u) is constant w.r.t. var
            // ∫ exp(u) dx = x * exp(u)
            let x = store.sym(var);
            Some(store.mul(vec![x, expr]))
        }
        (Op::Integer, Payload::Int(a)) => {
            // du/dx = a (constant), so ∫ exp(u) dx = (1/a) exp(u)
            let inv_a = store.rat(1, *a);
            Some(store.mul(vec![inv_a, expr]))
        }
        (Op::Rational, Payload::Rat(n, d)) => {
            // du/dx = n/d (constant), so ∫ exp(u) dx = (d/n) exp(u)
            let inv_a = store.rat(*d, *n);
            Some(store.mul(vec![inv_a, expr]))
        }
        _ => {
            // du/dx is not constant - more complex pattern
            None
        }
    }
}

/// Attempts to integrate expressions involving logarithms using Risch principles
///
/// Handles patterns like:
/// - ∫ 1/x dx = ln|x|
/// - ∫ f'/f dx = ln|f| (logarithmic derivative pattern)
/// - ∫ ln(x) * g(x) dx - deferred to integration by parts
///
/// Returns an antiderivative if a logarithmic pattern is detected.
pub fn try_integrate_logarithmic(store: &mut Store, expr: ExprId, var: &str) -> Option<ExprId> {
    // Pattern 1: ∫ 1/x dx = ln(x)
    // Check if expr is x^(-1) or a rational with numerator 1 and denominator x
    match store.get(expr).op {
        Op::Pow => {
            let children = &store.get(expr).children;
            if children.len() == 2 {
                let base = children[0];
                let exp = children[1];

                // Check for x^(-1)
                if matches!((&store.get(exp).op, &store.get(exp).payload), (Op::Integer, Payload::Int(-1)))
                    && matches!((&store.get(base).op, &store.get(base).payload), (Op::Symbol, Payload::Sym(s)) if s == var)
                {
                    // ∫ x^(-1) dx = ln(x)
                    return Some(store.func("ln", vec![base]));
                }
            }
            None
        }
        // Pattern 2: Check for g'(x)/g(x) pattern
        // This is complex and typically handled by u-substitution in main integrate
        // For now, return None to defer to main engine
        _ => None,
    }
}

/// Builds a differential field tower for an expression
///
/// Analyzes the nested structure of exponentials and logarithms to construct
/// a tower representation suitable for Risch algorithm application.
///
/// Returns a vector of tower elements ordered from base to top.
#[allow(dead_code)]
pub fn build_tower(store: &mut Store, expr: ExprId, var: &str) -> Vec<TowerElement> {
    let mut tower = Vec::new();

    // Start with the base field (the variable itself)
    let x = store.sym(var);
    tower.push(TowerElement {
        expr: x,
        extension: ExtensionType::Base,
        derivative: Some(store.int(1)),
    });

    // Recursively detect extensions
    // This is a simplified version; full Risch requires more sophisticated analysis
    let ext_type = detect_extension(store, expr, var);
    match ext_type {
        ExtensionType::Exponential(u) | ExtensionType::Logarithmic(u) => {
            let deriv = diff(store, expr, var);
            tower.push(TowerElement { expr, extension: ext_type, derivative: Some(deriv) });

            // Check if u itself has extensions
            let u_ext = detect_extension(store, u, var);
            if !matches!(u_ext, ExtensionType::Base) {
                // Recursive case - u has its own extensions
                // For now, we stop at depth 2; full implementation would recurse
            }
        }
        ExtensionType::Base => {
            // No extension, just add the expression
            let deriv = diff(store, expr, var);
            tower.push(TowerElement {
                expr,
                extension: ExtensionType::Base,
                derivative: Some(deriv),
            });
        }
    }

    tower
}
