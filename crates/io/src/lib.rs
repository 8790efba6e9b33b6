//! I/O crate (stub): lightweight parser/printers will live here.
#![allow(unused)]

/// LaTeX printer for expressions.
pub mod latex;

pub use latex::to_latex;
