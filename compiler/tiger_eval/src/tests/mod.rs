//! Unit tests for the evaluator internals.

mod errors_tests;
