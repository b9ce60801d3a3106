//! Common test utilities for exercise-pack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory and home for running the binary
//! - Archive helpers for reading results back

#![allow(dead_code)]

pub mod env;

pub use env::*;
