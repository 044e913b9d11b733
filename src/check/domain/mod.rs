//! Domain model for command checks.

mod check;
mod error;
mod group;

pub use check::{AsyncCheckFn, Check, CheckCallback, CheckResult, SyncCheckFn};
pub use error::{CheckError, CheckFailure};
pub use group::{CommandCheck, ExclusiveCheckGroup};
