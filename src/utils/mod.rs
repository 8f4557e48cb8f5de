//! Shared request helpers.

pub mod validate;
