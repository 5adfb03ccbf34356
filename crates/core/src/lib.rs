//! Shared primitives for the donaria workspace.

pub mod types;
