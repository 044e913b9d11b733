//! Unit tests for the context module.


mod owner_cache_tests;
