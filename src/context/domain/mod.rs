//! Domain model for command invocation contexts.
//!
//! Identifiers, entities and the permission set mirror the host platform's
//! object model closely enough for checks and converters; the [`Context`]
//! ties them to one invocation.

mod context;
mod entities;
mod error;
mod ids;
mod options;
mod permissions;
mod surface;

pub use context::{Context, ContextBuilder};
pub use entities::{Attachment, Author, Guild, GuildChannel, Member};
pub use error::ParseSnowflakeError;
pub use ids::{ChannelId, GuildId, RoleId, UserId, WebhookId};
pub use options::OptionBag;
pub use permissions::Permissions;
pub use surface::{InvocationSurface, PrefixMessage, SurfaceKind};
