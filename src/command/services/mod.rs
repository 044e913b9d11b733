//! Command services: argument parsing and prefix invocation.

mod invocation;
mod parser;

pub use invocation::{
    InvocationError, InvocationResult, PrefixCommandService, PrefixInvocationRequest,
};
pub use parser::{ArgumentParser, convert, parse_arguments};
