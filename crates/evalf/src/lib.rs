//! evalf: Numeric evaluation of symbolic expressions
//!
//! This module provides arbitrary-precision floating-point evaluation of symbolic expressions.
//! For now, uses f64 for simplicity. Future versions can add MPFR via feature flags.

#![deny(warnings)]

use expr_core::{ExprId, Op, Payload, Store};
use std::collections::HashMap;

/// Evaluation context holding variable bindings
#[derive(Default, Clone, Debug)]
pub struct EvalContext {
    bindings: HashMap<String, f64>,
}

impl EvalContext {
    /// Create a new empty evaluation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a numeric value
    pub fn bind<S: Into<String>>(&mut self, name: S, value: f64) -> &mut Self {
        self.bindings.insert(name.into(), value);
        self
    }

    /// Get the value of a bound variable
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

/// Error type for evaluation failures
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Unbound variable
    UnboundVariable(String),
    /// Unknown function
    UnknownFunction(String),
    /// Domain error (e.g., ln of negative number)
    DomainError(String),
    /// Result is non-finite (infinity or NaN)
    NonFinite,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => write!(f, "unbound variable: {}", name),
            EvalError::UnknownFunction(name) => write!(f, "unknown function: {}", name),
            EvalError::DomainError(msg) => write!(f, "domain error: {}", msg),
            EvalError::NonFinite => write!(f, "result is non-finite"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate an expression to a floating-point number
pub fn eval(store: &Store, id: ExprId, ctx: &EvalContext) -> Result<f64, EvalError> {
    let result = eval_recursive(store, id, ctx)?;

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite)
    }
}

/// Evaluate with a single variable binding (convenience function)
pub fn eval_at(store: &Store, id: ExprId, var: &str, value: f64) -> Result<f64, EvalError> {
    let mut ctx = EvalContext::new();
    ctx.bind(var, value);
    eval(store, id, &ctx)
}

fn eval_recursive(store: &Store, id: ExprId, ctx: &EvalContext) -> Result<f64, EvalError> {
    let node = store.get(id);

    match (&node.op, &node.payload) {
        // Constants
        (Op::Integer, Payload::Int(k)) => Ok(*k as f64),

        (Op::Rational, Payload::Rat(num, den)) => Ok((*num as f64) / (*den as f64)),

        // Symbols
        (Op::Symbol, Payload::Sym(name)) => {
            ctx.get(name).ok_or_else(|| EvalError::UnboundVariable(name.clone()))
        }

        // Addition
        (Op::Add, _) => {
            let mut sum = 0.0;
            for &child in &node.children {
                sum += eval_recursive(store, child, ctx)?;
            }
            Ok(sum)
        }

        // Multiplication
        (Op::Mul, _) => {
            let mut product = 1.0;
            for &child in &node.children {
                product *= eval_recursive(store, child, ctx)?;
            }
            Ok(product)
        }

        // Power
        (Op::Pow, _) => {
            let base = eval_recursive(store, node.children[0], ctx)?;
            let exponent = eval_recursive(store, node.children[1], ctx)?;
            Ok(base.powf(exponent))
        }

        // Functions
        (Op::Function, Payload::Func(name)) => eval_function(store, name, &node.children, ctx),

        _ => Err(EvalError::DomainError(format!("cannot evaluate {:?}", node.op))),
    }
}

fn eval_function(
    store: &Store,
    name: &str,
    args: &[ExprId],
    ctx: &EvalContext,
) -> Result<f64, EvalError> {
    match name {
        // Trigonometric functions
        "sin" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.sin())
        }

        "cos" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.cos())
        }

        "tan" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.tan())
        }

        // Inverse trigonometric
        "asin" | "arcsin" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if !(-1.0..=1.0).contains(&x) {
                return Err(EvalError::DomainError(format!(
                    "asin requires -1 <= x <= 1, got {}",
                    x
                )));
            }
            Ok(x.asin())
        }

        "acos" | "arccos" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if !(-1.0..=1.0).contains(&x) {
                return Err(EvalError::DomainError(format!(
                    "acos requires -1 <= x <= 1, got {}",
                    x
                )));
            }
            Ok(x.acos())
        }

        "atan" | "arctan" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.atan())
        }

        // Hyperbolic functions
        "sinh" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.sinh())
        }

        "cosh" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.cosh())
        }

        "tanh" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.tanh())
        }

        // Exponential and logarithmic
        "exp" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.exp())
        }

        "ln" | "log" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if x <= 0.0 {
                return Err(EvalError::DomainError(format!("ln requires x > 0, got {}", x)));
            }
            Ok(x.ln())
        }

        "log10" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if x <= 0.0 {
                return Err(EvalError::DomainError(format!("log10 requires x > 0, got {}", x)));
            }
            Ok(x.log10())
        }

        "log2" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if x <= 0.0 {
                return Err(EvalError::DomainError(format!("log2 requires x > 0, got {}", x)));
            }
            Ok(x.log2())
        }

        // Other functions
        "sqrt" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            if x < 0.0 {
                return Err(EvalError::DomainError(format!("sqrt requires x >= 0, got {}", x)));
            }
            Ok(x.sqrt())
        }

        "abs" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.abs())
        }

        "floor" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.floor())
        }

        "ceil" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.ceil())
        }

        "round" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            Ok(x.round())
        }

        // Two-argument functions
        "atan2" | "arctan2" => {
            check_arity(name, args, 2)?;
            let y = eval_recursive(store, args[0], ctx)?;
            let x = eval_recursive(store, args[1], ctx)?;
            Ok(y.atan2(x))
        }

        "min" => {
            if args.len() < 2 {
                return Err(EvalError::DomainError(format!(
                    "min requires at least 2 arguments, got {}",
                    args.len()
                )));
            }
            let mut min_val = eval_recursive(store, args[0], ctx)?;
            for &arg in &args[1..] {
                let val = eval_recursive(store, arg, ctx)?;
                if val < min_val {
                    min_val = val;
                }
            }
            Ok(min_val)
        }

        "max" => {
            if args.len() < 2 {
                return Err(EvalError::DomainError(format!(
                    "max requires at least 2 arguments, got {}",
                    args.len()
                )));
            }
            let mut max_val = eval_recursive(store, args[0], ctx)?;
            for &arg in &args[1..] {
                let val = eval_recursive(store, arg, ctx)?;
                if val > max_val {
                    max_val = val;
                }
            }
            Ok(max_val)
        }

        // Special functions (Phase 3)
        "Gamma" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            let gamma_func = special::gamma::GammaFunction;
            special::SpecialFunction::eval(&gamma_func, &[x])
                .ok_or_else(|| EvalError::DomainError(format!("Gamma({}) not computable", x)))
        }

        "erf" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            let erf_func = special::erf::ErfFunction;
            special::SpecialFunction::eval(&erf_func, &[x])
                .ok_or_else(|| EvalError::DomainError(format!("erf({}) not computable", x)))
        }

        "Ei" => {
            check_arity(name, args, 1)?;
            let x = eval_recursive(store, args[0], ctx)?;
            let ei_func = special::expint::EiFunction;
            special::SpecialFunction::eval(&ei_func, &[x])
                .ok_or_else(|| EvalError::DomainError(format!("Ei({}) not computable", x)))
        }

        _ => Err(EvalError::UnknownFunction(name.to_string())),
    }
}

fn check_arity(name: &str, args: &[ExprId], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        Err(EvalError::DomainError(format!(
            "{} requires {} argument(s), got {}",
            name,
            expected,
            args.len()
        )))
    } else {
        Ok(())
    }
}
