#![deny(warnings)]
//! End-to-end integration tests across crates.
