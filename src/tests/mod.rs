//! Test modules for the suffix index crate.
//!
//! This module contains the testing infrastructure:
//! - Scenario tests replaying documented tree shapes
//! - Property-based tests using proptest
//! - Configuration loading tests
//! - Shared strategies and fixtures

pub mod config_tests;
