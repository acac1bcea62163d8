//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Builders and fixtures shared across tests
//! - integration: Multi-component workflow tests (import, export, round trips)
//! - unit: Single-component unit tests

mod integration;
