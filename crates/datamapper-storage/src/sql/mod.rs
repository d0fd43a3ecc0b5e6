//! SQL text and bind rewriting. Pure functions, no I/O.

pub mod bulk_insert;
pub mod conditions;
pub mod normalizer;
