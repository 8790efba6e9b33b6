//! Symmetrica: a comprehensive computer algebra system for symbolic mathematics.

pub use arith;
pub use calculus;
pub use evalf;
pub use expr_core;
pub use io;
pub use matrix;
pub use pattern;
pub use plot;
pub use polys;
pub use simplify;
pub use solver;
