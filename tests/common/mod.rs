//! Common test utilities for Structuresmith CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with config and templates
//! - Fixtures: Reusable declaration files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
