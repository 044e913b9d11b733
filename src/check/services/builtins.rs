//! Built-in checks.
//!
//! Guild-dependent checks run [`guild_only`] first, so they fail with
//! [`CheckFailure::OnlyInGuild`] outside guilds. Entities that cannot be
//! resolved from the cache yield [`CheckError::InsufficientCache`].

use futures::future::BoxFuture;
use std::collections::HashSet;

use crate::check::domain::{Check, CheckError, CheckFailure, CheckResult};
use crate::context::domain::{Context, Guild, GuildChannel, GuildId, Member, Permissions, RoleId};

/// How [`has_roles`] combines the required roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleMode {
    /// Every role is required.
    #[default]
    All,
    /// One of the roles suffices.
    Any,
}

/// Passes only for application owners.
///
/// Owner IDs are fetched on first use and cached on the [`App`] for every
/// later evaluation.
///
/// [`App`]: crate::context::services::App
#[must_use]
pub fn owner_only() -> Check {
    Check::from_async("owner_only", evaluate_owner_only)
}

fn evaluate_owner_only(context: &Context) -> BoxFuture<'_, CheckResult> {
    Box::pin(async move {
        let owner_ids = context.app().owner_ids().await?;
        if owner_ids.contains(&context.author().id) {
            Ok(true)
        } else {
            Err(CheckFailure::NotOwner.into())
        }
    })
}

/// Passes only inside a guild.
#[must_use]
pub fn guild_only() -> Check {
    Check::sync("guild_only", |context| require_guild(context).map(|_| true))
}

/// Passes only outside guilds.
#[must_use]
pub fn dm_only() -> Check {
    Check::sync("dm_only", |context| {
        if context.guild_id().is_some() {
            return Err(CheckFailure::OnlyInDm.into());
        }
        Ok(true)
    })
}

/// Passes only for bot authors.
#[must_use]
pub fn bot_only() -> Check {
    Check::sync("bot_only", |context| {
        if !context.author().is_bot {
            return Err(CheckFailure::BotOnly.into());
        }
        Ok(true)
    })
}

/// Passes only for human authors.
///
/// Prefix messages sent by webhooks are rejected as well.
#[must_use]
pub fn human_only() -> Check {
    Check::sync("human_only", |context| {
        let from_webhook = context
            .prefix_message()
            .is_some_and(|message| message.webhook_id.is_some());
        if context.author().is_bot || from_webhook {
            return Err(CheckFailure::HumanOnly.into());
        }
        Ok(true)
    })
}

/// Passes only for prefix messages sent by a webhook.
#[must_use]
pub fn webhook_only() -> Check {
    Check::sync("webhook_only", |context| {
        let from_webhook = context
            .prefix_message()
            .is_some_and(|message| message.webhook_id.is_some());
        if !from_webhook {
            return Err(CheckFailure::WebhookOnly.into());
        }
        Ok(true)
    })
}

/// Passes only in guild channels flagged NSFW.
#[must_use]
pub fn nsfw_channel_only() -> Check {
    Check::sync("nsfw_channel_only", |context| {
        let is_nsfw = context.guild_id().is_some()
            && context.get_channel().is_some_and(|channel| channel.is_nsfw);
        if !is_nsfw {
            return Err(CheckFailure::NsfwChannelOnly.into());
        }
        Ok(true)
    })
}

/// Passes when the invoking member has the given roles.
///
/// The failure lists the required roles the member lacks. In
/// [`RoleMode::Any`] that is every required role.
#[must_use]
pub fn has_roles(roles: impl IntoIterator<Item = RoleId>, mode: RoleMode) -> Check {
    let required: Vec<RoleId> = roles.into_iter().collect();
    Check::sync("has_roles", move |context| {
        require_guild(context)?;
        let member = require_member(context)?;
        let missing: Vec<RoleId> = required
            .iter()
            .copied()
            .filter(|role| !member.has_role(*role))
            .collect();
        let passed = match mode {
            RoleMode::All => missing.is_empty(),
            RoleMode::Any => missing.len() < required.len(),
        };
        if passed {
            return Ok(true);
        }
        Err(CheckFailure::MissingRequiredRole { missing }.into())
    })
}

/// Passes when the invoking member has `perms` in the invoking channel,
/// including guild-wide role permissions. Always passes for the guild owner.
#[must_use]
pub fn has_guild_permissions(perms: Permissions) -> Check {
    Check::sync("has_guild_permissions", move |context| {
        require_guild(context)?;
        let channel = require_channel(context)?;
        let guild = require_cached_guild(context)?;
        if guild.owner_id == context.author().id {
            return Ok(true);
        }
        let member = require_member(context)?;
        let effective = context
            .app()
            .permissions()
            .permissions_in(&channel, member, true);
        user_permissions(perms, effective)
    })
}

/// Passes when the invoking member's roles grant `perms`.
#[must_use]
pub fn has_role_permissions(perms: Permissions) -> Check {
    Check::sync("has_role_permissions", move |context| {
        require_guild(context)?;
        let member = require_member(context)?;
        let effective = context.app().permissions().permissions_for(member);
        user_permissions(perms, effective)
    })
}

/// Passes when the invoking channel's overwrites grant `perms` to the
/// invoking member.
#[must_use]
pub fn has_channel_permissions(perms: Permissions) -> Check {
    Check::sync("has_channel_permissions", move |context| {
        require_guild(context)?;
        let channel = require_channel(context)?;
        let member = require_member(context)?;
        let effective = context
            .app()
            .permissions()
            .permissions_in(&channel, member, false);
        user_permissions(perms, effective)
    })
}

/// Bot-side counterpart of [`has_guild_permissions`].
#[must_use]
pub fn bot_has_guild_permissions(perms: Permissions) -> Check {
    Check::sync("bot_has_guild_permissions", move |context| {
        require_guild(context)?;
        let channel = require_channel(context)?;
        let guild = require_cached_guild(context)?;
        let me = require_my_member(context)?;
        if guild.owner_id == me.user_id {
            return Ok(true);
        }
        let effective = context
            .app()
            .permissions()
            .permissions_in(&channel, &me, true);
        bot_permissions(perms, effective)
    })
}

/// Bot-side counterpart of [`has_role_permissions`].
#[must_use]
pub fn bot_has_role_permissions(perms: Permissions) -> Check {
    Check::sync("bot_has_role_permissions", move |context| {
        require_guild(context)?;
        require_cached_guild(context)?;
        let me = require_my_member(context)?;
        let effective = context.app().permissions().permissions_for(&me);
        bot_permissions(perms, effective)
    })
}

/// Bot-side counterpart of [`has_channel_permissions`].
#[must_use]
pub fn bot_has_channel_permissions(perms: Permissions) -> Check {
    Check::sync("bot_has_channel_permissions", move |context| {
        require_guild(context)?;
        let channel = require_channel(context)?;
        require_cached_guild(context)?;
        let me = require_my_member(context)?;
        let effective = context
            .app()
            .permissions()
            .permissions_in(&channel, &me, false);
        bot_permissions(perms, effective)
    })
}

/// Passes when the message has attachments.
///
/// With `extensions` non-empty, every attachment's filename must end with
/// one of them.
#[must_use]
pub fn has_attachments<I, S>(extensions: I) -> Check
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: HashSet<String> = extensions.into_iter().map(Into::into).collect();
    Check::sync("has_attachments", move |context| {
        let attachments = context.attachments();
        let accepted = !attachments.is_empty()
            && (allowed.is_empty()
                || attachments.iter().all(|attachment| {
                    allowed
                        .iter()
                        .any(|extension| attachment.filename.ends_with(extension.as_str()))
                }));
        if !accepted {
            return Err(CheckFailure::MissingRequiredAttachment.into());
        }
        Ok(true)
    })
}

fn require_guild(context: &Context) -> Result<GuildId, CheckError> {
    context
        .guild_id()
        .ok_or_else(|| CheckFailure::OnlyInGuild.into())
}

fn require_member(context: &Context) -> Result<&Member, CheckError> {
    context
        .member()
        .ok_or(CheckError::InsufficientCache { entity: "member" })
}

fn require_channel(context: &Context) -> Result<GuildChannel, CheckError> {
    context
        .get_channel()
        .ok_or(CheckError::InsufficientCache { entity: "channel" })
}

fn require_cached_guild(context: &Context) -> Result<Guild, CheckError> {
    context
        .get_guild()
        .ok_or(CheckError::InsufficientCache { entity: "guild" })
}

fn require_my_member(context: &Context) -> Result<Member, CheckError> {
    context
        .get_my_member()
        .ok_or(CheckError::InsufficientCache { entity: "own member" })
}

fn user_permissions(required: Permissions, effective: Permissions) -> CheckResult {
    let missing = required.difference(effective);
    if missing.is_empty() {
        return Ok(true);
    }
    Err(CheckFailure::MissingRequiredPermission { missing }.into())
}

fn bot_permissions(required: Permissions, effective: Permissions) -> CheckResult {
    let missing = required.difference(effective);
    if missing.is_empty() {
        return Ok(true);
    }
    Err(CheckFailure::BotMissingRequiredPermission { missing }.into())
}
