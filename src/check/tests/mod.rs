//! Unit tests for the check module.
