//! Given steps for prefix invocation BDD scenarios.

use std::sync::Arc;

use super::world::{CHANNEL_ID, MEMBER_ID, PrefixInvocationWorld, run_async, scenario_command};
use eyre::WrapErr;
use filament::command::{
    adapters::memory::InMemoryCommandRegistry,
    domain::PrefixConfig,
    services::PrefixCommandService,
};
use filament::context::domain::Permissions;
use rstest_bdd_macros::given;

#[given(r#"a prefix command service with the "{name}" command"#)]
fn service_with_command(
    world: &mut PrefixInvocationWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let command = scenario_command(&name)
        .ok_or_else(|| eyre::eyre!("no scenario command named {name}"))?;
    let registry = run_async(InMemoryCommandRegistry::with_commands([command]))
        .wrap_err("register scenario command")?;
    world.service = Some(PrefixCommandService::new(
        Arc::new(registry),
        world.app(),
        PrefixConfig::default(),
    ));
    Ok(())
}

#[given("the member may manage messages")]
fn member_may_manage_messages(world: &mut PrefixInvocationWorld) {
    world
        .cache
        .grant_channel_permissions(CHANNEL_ID, MEMBER_ID, Permissions::MANAGE_MESSAGES);
}
