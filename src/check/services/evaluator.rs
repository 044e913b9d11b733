//! Command-level check runner.

use tracing::debug;

use crate::check::domain::{CheckError, CheckFailure, CommandCheck};
use crate::context::domain::Context;

/// Evaluates a command's checks in order, stopping at the first failure.
///
/// A check returning `false` fails as [`CheckFailure::Failed`] naming it.
///
/// # Errors
///
/// Returns the first check's error, or the [`CheckFailure::Failed`] of the
/// first check returning `false`.
pub async fn run_checks(checks: &[CommandCheck], context: &Context) -> Result<(), CheckError> {
    for check in checks {
        let passed = check.evaluate(context).await.inspect_err(|err| {
            debug!(check = %check.name(), error = %err, "check failed");
        })?;
        if !passed {
            debug!(check = %check.name(), "check returned false");
            return Err(CheckFailure::failed(check.name()).into());
        }
    }
    Ok(())
}
