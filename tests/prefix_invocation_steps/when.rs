//! When steps for prefix invocation BDD scenarios.

use super::world::{CHANNEL_ID, GUILD_ID, MEMBER_ID, OWNER_ID, PrefixInvocationWorld, run_async};
use filament::command::services::PrefixInvocationRequest;
use filament::context::domain::{Author, Member, UserId};
use rstest_bdd_macros::when;

fn send(
    world: &mut PrefixInvocationWorld,
    author: UserId,
    content: &str,
) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing service in scenario world"))?;
    let request = PrefixInvocationRequest::new(content, Author::human(author), CHANNEL_ID)
        .in_guild(GUILD_ID, Some(Member::new(author, GUILD_ID)));
    let result = run_async(service.prepare(request));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"a member sends "{content}""#)]
fn member_sends(world: &mut PrefixInvocationWorld, content: String) -> Result<(), eyre::Report> {
    send(world, MEMBER_ID, &content)
}

#[when(r#"the owner sends "{content}""#)]
fn owner_sends(world: &mut PrefixInvocationWorld, content: String) -> Result<(), eyre::Report> {
    send(world, OWNER_ID, &content)
}
