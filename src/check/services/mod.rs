//! Check services: built-in checks and the command-level runner.

pub mod builtins;
mod evaluator;

pub use builtins::RoleMode;
pub use evaluator::run_checks;
