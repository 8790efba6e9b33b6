//! Assumptions module (stub): 3-valued lattice and context plumbing will live here.
#![allow(unused)]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

/// Placeholder context type for assumptions.
pub struct Context;

impl Context {
    pub fn new() -> Self {
        Context
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
