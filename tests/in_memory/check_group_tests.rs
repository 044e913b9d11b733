//! In-memory integration tests for exclusive check groups.

use filament::check::{
    domain::{Check, CheckError, CheckFailure, CommandCheck},
    services::{
        builtins::{RoleMode, bot_has_channel_permissions, dm_only, guild_only, has_roles},
        run_checks,
    },
};
use filament::context::{
    adapters::memory::InMemoryEntityCache,
    domain::{Author, ChannelId, Context, InvocationSurface, Member, Permissions, RoleId},
};
use rstest::rstest;

use crate::in_memory::helpers::{AUTHOR_ID, CHANNEL_ID, GUILD_ID, app, cache};

const HELPER_ROLE: RoleId = RoleId::new(7);

fn slash_context(cache: &InMemoryEntityCache, channel_id: ChannelId, roles: &[RoleId]) -> Context {
    Context::builder(
        app(cache),
        InvocationSurface::Slash,
        Author::human(AUTHOR_ID),
        channel_id,
    )
    .in_guild(
        GUILD_ID,
        Some(Member::new(AUTHOR_ID, GUILD_ID).with_roles(roles.iter().copied())),
    )
    .build()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complementary_checks_always_pass(cache: InMemoryEntityCache) {
    let checks = vec![CommandCheck::from(guild_only() | dm_only())];
    let context = slash_context(&cache, CHANNEL_ID, &[]);

    let outcome = run_checks(&checks, &context).await;

    assert!(outcome.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cache_misses_are_recorded_as_errored_failures(cache: InMemoryEntityCache) {
    let group = bot_has_channel_permissions(Permissions::SEND_MESSAGES)
        | has_roles([HELPER_ROLE], RoleMode::All);
    let context = slash_context(&cache, ChannelId::new(404), &[]);

    let err = group.evaluate(&context).await.expect_err("both members fail");

    let Some(CheckFailure::Exclusive(failures)) = err.as_failure() else {
        panic!("expected an aggregate failure, got {err:?}");
    };
    assert!(matches!(
        failures.first(),
        Some(CheckFailure::Errored { source })
            if matches!(**source, CheckError::InsufficientCache { entity: "channel" })
    ));
    assert!(matches!(
        failures.get(1),
        Some(CheckFailure::MissingRequiredRole { missing }) if missing == &[HELPER_ROLE]
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_checks_combine_with_builtins(cache: InMemoryEntityCache) {
    let weekday = Check::sync("weekday", |_| Err(CheckFailure::custom("Closed today").into()));
    let checks = vec![
        CommandCheck::from(guild_only()),
        CommandCheck::from(weekday | has_roles([HELPER_ROLE], RoleMode::Any)),
    ];
    let helper = slash_context(&cache, CHANNEL_ID, &[HELPER_ROLE]);
    let visitor = slash_context(&cache, CHANNEL_ID, &[]);

    let allowed = run_checks(&checks, &helper).await;
    let denied = run_checks(&checks, &visitor)
        .await
        .expect_err("visitor lacks the role");

    assert!(allowed.is_ok());
    assert!(denied.to_string().starts_with("None of the exclusive checks passed: Closed today"));
}
