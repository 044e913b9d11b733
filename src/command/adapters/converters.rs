//! Built-in argument converters.

use async_trait::async_trait;
use serde_json::Value;

use crate::command::{
    domain::{ConversionError, ConversionResult, ConverterRef},
    ports::{Converter, ConverterFactory},
};
use crate::context::domain::{ChannelId, Context, UserId};

const TRUTHY: [&str; 7] = ["yes", "y", "true", "t", "1", "enable", "on"];
const FALSY: [&str; 7] = ["no", "n", "false", "f", "0", "disable", "off"];

/// Keeps the raw text as a JSON string.
#[must_use]
pub fn to_string() -> ConverterRef {
    ConverterRef::transform(|raw| Ok(Value::String(raw.to_owned())))
}

/// Parses a signed 64-bit integer.
#[must_use]
pub fn to_integer() -> ConverterRef {
    ConverterRef::transform(parse_integer)
}

/// Parses a finite floating-point number.
#[must_use]
pub fn to_float() -> ConverterRef {
    ConverterRef::transform(parse_float)
}

/// Parses a boolean word such as `yes`, `off` or `1`, ignoring case.
#[must_use]
pub fn to_boolean() -> ConverterRef {
    ConverterRef::transform(parse_boolean)
}

/// Parses a raw snowflake or a user, channel or role mention.
#[must_use]
pub fn to_snowflake() -> ConverterRef {
    ConverterRef::transform(|raw| {
        parse_snowflake(raw)
            .map(Value::from)
            .ok_or_else(|| ConversionError::invalid(raw, "snowflake"))
    })
}

fn parse_integer(raw: &str) -> ConversionResult {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| ConversionError::invalid(raw, "integer"))
}

fn parse_float(raw: &str) -> ConversionResult {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConversionError::invalid(raw, "float"))
}

fn parse_boolean(raw: &str) -> ConversionResult {
    let word = raw.trim().to_lowercase();
    if TRUTHY.contains(&word.as_str()) {
        Ok(Value::Bool(true))
    } else if FALSY.contains(&word.as_str()) {
        Ok(Value::Bool(false))
    } else {
        Err(ConversionError::invalid(raw, "boolean"))
    }
}

/// Extracts the ID from `123`, `<@123>`, `<@!123>`, `<#123>` or `<@&123>`.
fn parse_snowflake(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .map_or(Some(trimmed), |inner| {
            ["@!", "@&", "@", "#"]
                .iter()
                .find_map(|sigil| inner.strip_prefix(sigil))
        })?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Resolves a guild member of the invocation's guild from an ID or mention.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberConverter;

impl ConverterFactory for MemberConverter {
    fn bind<'ctx>(&self, context: &'ctx Context) -> Box<dyn Converter + 'ctx> {
        Box::new(BoundMemberConverter { context })
    }

    fn type_name(&self) -> &'static str {
        "member"
    }
}

struct BoundMemberConverter<'ctx> {
    context: &'ctx Context,
}

#[async_trait]
impl Converter for BoundMemberConverter<'_> {
    async fn convert(&self, raw: &str) -> ConversionResult {
        let guild_id = self
            .context
            .guild_id()
            .ok_or_else(|| ConversionError::custom("members can only be resolved in a guild"))?;
        let user_id = parse_snowflake(raw)
            .map(UserId::new)
            .ok_or_else(|| ConversionError::invalid(raw, "member"))?;
        let member = self
            .context
            .app()
            .cache()
            .get_member(guild_id, user_id)
            .ok_or_else(|| ConversionError::invalid(raw, "member"))?;
        serde_json::to_value(member).map_err(|err| ConversionError::custom(err.to_string()))
    }
}

/// Resolves a channel of the invocation's guild from an ID or mention.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuildChannelConverter;

impl ConverterFactory for GuildChannelConverter {
    fn bind<'ctx>(&self, context: &'ctx Context) -> Box<dyn Converter + 'ctx> {
        Box::new(BoundGuildChannelConverter { context })
    }

    fn type_name(&self) -> &'static str {
        "guild channel"
    }
}

struct BoundGuildChannelConverter<'ctx> {
    context: &'ctx Context,
}

#[async_trait]
impl Converter for BoundGuildChannelConverter<'_> {
    async fn convert(&self, raw: &str) -> ConversionResult {
        let channel = parse_snowflake(raw)
            .map(ChannelId::new)
            .and_then(|channel_id| self.context.app().cache().get_guild_channel(channel_id))
            .filter(|channel| Some(channel.guild_id) == self.context.guild_id())
            .ok_or_else(|| ConversionError::invalid(raw, "guild channel"))?;
        serde_json::to_value(channel).map_err(|err| ConversionError::custom(err.to_string()))
    }
}
