//! Step definitions for prefix invocation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
