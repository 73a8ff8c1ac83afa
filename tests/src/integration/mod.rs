//! # Integration Tests
//!
//! Exercise the enrollment crate and the gateway together through their
//! public APIs only.

pub mod support;

mod concurrency;
mod flows;
mod persistence;
