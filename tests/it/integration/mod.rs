//! Integration tests for Rondel.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod roundtrip_tests;
