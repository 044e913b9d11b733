//! Named check predicates.

use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

use super::CheckError;
use crate::context::domain::{Context, SurfaceKind};

/// Result of evaluating a check callback.
pub type CheckResult = Result<bool, CheckError>;

/// Synchronous check callback.
pub type SyncCheckFn = dyn Fn(&Context) -> CheckResult + Send + Sync;

/// Asynchronous check callback.
pub type AsyncCheckFn = dyn for<'ctx> Fn(&'ctx Context) -> BoxFuture<'ctx, CheckResult> + Send + Sync;

/// A check callback, either completing immediately or asynchronously.
#[derive(Clone)]
pub enum CheckCallback {
    /// Completes immediately.
    Sync(Arc<SyncCheckFn>),
    /// Completes asynchronously.
    Async(Arc<AsyncCheckFn>),
}

impl CheckCallback {
    /// Wraps a synchronous callback.
    #[must_use]
    pub fn sync<F>(callback: F) -> Self
    where
        F: Fn(&Context) -> CheckResult + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(callback))
    }

    /// Wraps an asynchronous callback.
    #[must_use]
    pub fn from_async<F>(callback: F) -> Self
    where
        F: for<'ctx> Fn(&'ctx Context) -> BoxFuture<'ctx, CheckResult> + Send + Sync + 'static,
    {
        Self::Async(Arc::new(callback))
    }

    /// Invokes the callback, awaiting it when asynchronous.
    ///
    /// # Errors
    ///
    /// Propagates the callback's error.
    pub async fn invoke(&self, context: &Context) -> CheckResult {
        match self {
            Self::Sync(callback) => callback(context),
            Self::Async(callback) => callback(context).await,
        }
    }
}

impl fmt::Debug for CheckCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("CheckCallback::Sync"),
            Self::Async(_) => f.write_str("CheckCallback::Async"),
        }
    }
}

/// A named predicate gating command execution.
///
/// A check holds one callback per invocation surface. Surfaces without their
/// own callback use the prefix callback.
///
/// A bare check returning `false` is not an error; built-in checks return
/// [`CheckError::Failed`] with a specific reason instead.
#[derive(Debug, Clone)]
pub struct Check {
    name: String,
    prefix: CheckCallback,
    slash: Option<CheckCallback>,
    message_command: Option<CheckCallback>,
    user_command: Option<CheckCallback>,
}

impl Check {
    /// Creates a check using `callback` for every surface.
    #[must_use]
    pub fn new(name: impl Into<String>, callback: CheckCallback) -> Self {
        Self {
            name: name.into(),
            prefix: callback,
            slash: None,
            message_command: None,
            user_command: None,
        }
    }

    /// Creates a check from a synchronous callback.
    #[must_use]
    pub fn sync<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Context) -> CheckResult + Send + Sync + 'static,
    {
        Self::new(name, CheckCallback::sync(callback))
    }

    /// Creates a check from an asynchronous callback.
    #[must_use]
    pub fn from_async<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: for<'ctx> Fn(&'ctx Context) -> BoxFuture<'ctx, CheckResult> + Send + Sync + 'static,
    {
        Self::new(name, CheckCallback::from_async(callback))
    }

    /// Overrides the callback for slash commands.
    #[must_use]
    pub fn with_slash(mut self, callback: CheckCallback) -> Self {
        self.slash = Some(callback);
        self
    }

    /// Overrides the callback for message context-menu commands.
    #[must_use]
    pub fn with_message_command(mut self, callback: CheckCallback) -> Self {
        self.message_command = Some(callback);
        self
    }

    /// Overrides the callback for user context-menu commands.
    #[must_use]
    pub fn with_user_command(mut self, callback: CheckCallback) -> Self {
        self.user_command = Some(callback);
        self
    }

    /// Returns the check name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selects the callback for `kind`.
    #[must_use]
    pub fn callback_for(&self, kind: SurfaceKind) -> &CheckCallback {
        let specific = match kind {
            SurfaceKind::Prefix => None,
            SurfaceKind::Slash => self.slash.as_ref(),
            SurfaceKind::MessageCommand => self.message_command.as_ref(),
            SurfaceKind::UserCommand => self.user_command.as_ref(),
        };
        specific.unwrap_or(&self.prefix)
    }

    /// Evaluates the check for `context`.
    ///
    /// # Errors
    ///
    /// Propagates the selected callback's error.
    pub async fn evaluate(&self, context: &Context) -> CheckResult {
        self.callback_for(context.surface_kind())
            .invoke(context)
            .await
    }
}
