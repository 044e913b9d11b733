//! Then steps for prefix invocation BDD scenarios.

use super::world::PrefixInvocationWorld;
use filament::command::services::{InvocationError, InvocationResult};
use filament::context::domain::Context;
use rstest_bdd_macros::then;
use serde_json::Value;

fn last_result(
    world: &PrefixInvocationWorld,
) -> Result<&InvocationResult<Option<Context>>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing invocation result"))
}

fn invoked_context(world: &PrefixInvocationWorld) -> Result<&Context, eyre::Report> {
    match last_result(world)? {
        Ok(Some(context)) => Ok(context),
        other => Err(eyre::eyre!("expected an invocation, got {other:?}")),
    }
}

fn option_value(world: &PrefixInvocationWorld, name: &str) -> Result<Value, eyre::Report> {
    invoked_context(world)?
        .options()
        .get(name)
        .cloned()
        .ok_or_else(|| eyre::eyre!("option {name} was not set"))
}

#[then("the invocation succeeds")]
fn invocation_succeeds(world: &PrefixInvocationWorld) -> Result<(), eyre::Report> {
    invoked_context(world).map(|_| ())
}

#[then(r#"the "{name}" option holds JSON {expected_json}"#)]
fn option_holds_json(
    world: &PrefixInvocationWorld,
    name: String,
    expected_json: String,
) -> Result<(), eyre::Report> {
    let expected: Value = serde_json::from_str(&expected_json)?;
    let actual = option_value(world, &name)?;
    if actual != expected {
        return Err(eyre::eyre!("expected {name} = {expected}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the "{name}" option reads "{text}""#)]
fn option_reads(
    world: &PrefixInvocationWorld,
    name: String,
    text: String,
) -> Result<(), eyre::Report> {
    let actual = option_value(world, &name)?;
    if actual.as_str() != Some(text.as_str()) {
        return Err(eyre::eyre!("expected {name} to read {text:?}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the invocation fails listing missing options "{names}""#)]
fn fails_listing_missing(
    world: &PrefixInvocationWorld,
    names: String,
) -> Result<(), eyre::Report> {
    let Err(InvocationError::Arguments(err)) = last_result(world)? else {
        return Err(eyre::eyre!("expected an argument error"));
    };
    let listed = err.missing_option_names().join(", ");
    if listed != names {
        return Err(eyre::eyre!("expected missing {names}, found {listed}"));
    }
    Ok(())
}

#[then("the invocation fails with malformed quoting")]
fn fails_with_malformed_quoting(world: &PrefixInvocationWorld) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(InvocationError::Arguments(err)) if err.is_malformed_quoting() => Ok(()),
        other => Err(eyre::eyre!("expected a quoting error, got {other:?}")),
    }
}

#[then(r#"the invocation fails because "{name}" is not a command"#)]
fn fails_with_unknown_command(
    world: &PrefixInvocationWorld,
    name: String,
) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(InvocationError::CommandNotFound { invoked_with }) if *invoked_with == name => Ok(()),
        other => Err(eyre::eyre!("expected command {name} to be unknown, got {other:?}")),
    }
}

#[then("the message is ignored")]
fn message_is_ignored(world: &PrefixInvocationWorld) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Ok(None) => Ok(()),
        other => Err(eyre::eyre!("expected the message to be ignored, got {other:?}")),
    }
}

#[then(r#"the invocation is denied with "{message}""#)]
fn invocation_denied(
    world: &PrefixInvocationWorld,
    message: String,
) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(InvocationError::Check(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected denial {message:?}, got {other:?}")),
    }
}
