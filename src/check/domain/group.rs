//! Exclusive check groups.

use std::ops::BitOr;
use tracing::trace;

use super::{Check, CheckFailure, CheckResult};
use crate::context::domain::Context;

/// Checks of which any one passing is sufficient.
///
/// Built with `|`; combining groups flattens them into one ordered sequence.
#[derive(Debug, Clone, Default)]
pub struct ExclusiveCheckGroup {
    checks: Vec<Check>,
}

impl ExclusiveCheckGroup {
    /// Creates a group from `checks` in order.
    #[must_use]
    pub fn new(checks: impl IntoIterator<Item = Check>) -> Self {
        Self {
            checks: checks.into_iter().collect(),
        }
    }

    /// Returns the member checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Returns the number of member checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Name listing the member names joined with ` | `.
    #[must_use]
    pub fn name(&self) -> String {
        self.checks
            .iter()
            .map(Check::name)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Evaluates members in order until one passes.
    ///
    /// Members after the first passing one are not evaluated. An empty group
    /// passes.
    ///
    /// # Errors
    ///
    /// When every member fails, returns the only failure of a one-member
    /// group, or a [`CheckFailure::Exclusive`] aggregating all of them.
    pub async fn evaluate(&self, context: &Context) -> CheckResult {
        let mut failures = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            match check.evaluate(context).await {
                Ok(true) => {
                    trace!(check = check.name(), "exclusive check passed");
                    return Ok(true);
                }
                Ok(false) => {
                    trace!(check = check.name(), "exclusive check returned false");
                    failures.push(CheckFailure::failed(check.name()));
                }
                Err(err) => {
                    trace!(check = check.name(), error = %err, "exclusive check failed");
                    failures.push(err.into_failure());
                }
            }
        }

        if failures.len() > 1 {
            return Err(CheckFailure::Exclusive(failures).into());
        }
        failures.pop().map_or(Ok(true), |failure| Err(failure.into()))
    }
}

impl BitOr for Check {
    type Output = ExclusiveCheckGroup;

    fn bitor(self, rhs: Self) -> Self::Output {
        ExclusiveCheckGroup::new([self, rhs])
    }
}

impl BitOr<ExclusiveCheckGroup> for Check {
    type Output = ExclusiveCheckGroup;

    fn bitor(self, rhs: ExclusiveCheckGroup) -> Self::Output {
        ExclusiveCheckGroup::new(std::iter::once(self).chain(rhs.checks))
    }
}

impl BitOr<Check> for ExclusiveCheckGroup {
    type Output = Self;

    fn bitor(mut self, rhs: Check) -> Self::Output {
        self.checks.push(rhs);
        self
    }
}

impl BitOr for ExclusiveCheckGroup {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.checks.extend(rhs.checks);
        self
    }
}

/// A check attached to a command.
#[derive(Debug, Clone)]
pub enum CommandCheck {
    /// A single check.
    Single(Check),
    /// An exclusive group.
    Exclusive(ExclusiveCheckGroup),
}

impl CommandCheck {
    /// Name used when reporting a bare `false` result.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Single(check) => check.name().to_owned(),
            Self::Exclusive(group) => group.name(),
        }
    }

    /// Evaluates the check or group.
    ///
    /// # Errors
    ///
    /// Propagates the check's or group's error.
    pub async fn evaluate(&self, context: &Context) -> CheckResult {
        match self {
            Self::Single(check) => check.evaluate(context).await,
            Self::Exclusive(group) => group.evaluate(context).await,
        }
    }
}

impl From<Check> for CommandCheck {
    fn from(check: Check) -> Self {
        Self::Single(check)
    }
}

impl From<ExclusiveCheckGroup> for CommandCheck {
    fn from(group: ExclusiveCheckGroup) -> Self {
        Self::Exclusive(group)
    }
}
