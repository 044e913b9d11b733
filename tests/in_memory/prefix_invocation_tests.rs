//! In-memory integration tests for prefix invocation.

use filament::check::{
    domain::{CheckError, CheckFailure},
    services::builtins::{has_guild_permissions, owner_only},
};
use filament::command::{
    adapters::converters::{to_integer, to_string},
    domain::{ArgumentError, OptionModifier, OptionSpec, PrefixCommand},
    services::InvocationError,
};
use filament::context::{
    adapters::memory::InMemoryEntityCache,
    domain::{Context, Permissions},
};
use rstest::rstest;
use serde_json::json;

use crate::in_memory::helpers::{
    AUTHOR_ID, CHANNEL_ID, OWNER_ID, cache, guild_message, service,
};

fn tag_command() -> PrefixCommand {
    PrefixCommand::new("tag")
        .with_description("Stores a tag")
        .with_option(OptionSpec::new("name", to_string()))
        .with_option(
            OptionSpec::new("content", to_string()).with_modifier(OptionModifier::ConsumeRest),
        )
}

fn sum_command() -> PrefixCommand {
    PrefixCommand::new("sum")
        .with_option(OptionSpec::new("numbers", to_integer()).with_modifier(OptionModifier::Greedy))
        .with_option(
            OptionSpec::new("label", to_string())
                .optional()
                .with_default("total"),
        )
}

fn purge_command() -> PrefixCommand {
    PrefixCommand::new("purge")
        .with_check(owner_only() | has_guild_permissions(Permissions::MANAGE_MESSAGES))
        .with_option(OptionSpec::new("count", to_integer()))
}

async fn invoke(cache: &InMemoryEntityCache, content: &str) -> Result<Context, InvocationError> {
    let service = service(cache, vec![tag_command(), sum_command(), purge_command()])
        .await
        .expect("commands should register");
    service
        .prepare(guild_message(content, AUTHOR_ID))
        .await
        .map(|context| context.expect("message should invoke a command"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn consume_rest_keeps_all_remaining_whitespace(cache: InMemoryEntityCache) {
    let context = invoke(&cache, "!tag greeting   Hello there,  friend")
        .await
        .expect("tag should parse");

    assert_eq!(context.options().get("name"), Some(&json!("greeting")));
    assert_eq!(
        context.options().get("content"),
        Some(&json!("   Hello there,  friend"))
    );
}

#[rstest]
#[case("!sum 1 2 3 apples", json!([1, 2, 3]), json!("apples"))]
#[case("!sum 4", json!([4]), json!("total"))]
#[case("!sum pears", json!([]), json!("pears"))]
#[tokio::test(flavor = "multi_thread")]
async fn greedy_option_hands_leftovers_to_the_next_option(
    cache: InMemoryEntityCache,
    #[case] content: &str,
    #[case] numbers: serde_json::Value,
    #[case] label: serde_json::Value,
) {
    let context = invoke(&cache, content).await.expect("sum should parse");

    assert_eq!(context.options().get("numbers").cloned(), Some(numbers));
    assert_eq!(context.options().get("label").cloned(), Some(label));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quoted_words_become_single_arguments(cache: InMemoryEntityCache) {
    let context = invoke(&cache, "!tag \u{201c}good morning\u{201d} \"rise and shine\"")
        .await
        .expect("tag should parse");

    assert_eq!(context.options().get("name"), Some(&json!("good morning")));
    assert_eq!(
        context.options().get("content"),
        Some(&json!(" \"rise and shine\""))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_quoting_is_reported(cache: InMemoryEntityCache) {
    let result = invoke(&cache, "!tag \"unfinished business").await;

    let Err(InvocationError::Arguments(err)) = result else {
        panic!("expected an argument error, got {result:?}");
    };
    assert!(err.is_malformed_quoting());
    assert!(matches!(err, ArgumentError::UnterminatedQuote { position: 5 }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn exclusive_check_reports_every_reason(cache: InMemoryEntityCache) {
    let result = invoke(&cache, "!purge 10").await;

    let Err(InvocationError::Check(err)) = result else {
        panic!("expected a check error, got {result:?}");
    };
    assert_eq!(
        err.to_string(),
        "None of the exclusive checks passed: You are not the owner of this bot, \
         You are missing one or more permissions required in order to run this command"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn exclusive_check_accepts_either_branch(cache: InMemoryEntityCache) {
    cache.grant_channel_permissions(CHANNEL_ID, AUTHOR_ID, Permissions::MANAGE_MESSAGES);
    let service = service(&cache, vec![purge_command()])
        .await
        .expect("commands should register");

    let by_permission = service
        .prepare(guild_message("!purge 10", AUTHOR_ID))
        .await
        .expect("author holds the permission");
    let by_ownership = service
        .prepare(guild_message("!purge 20", OWNER_ID))
        .await
        .expect("owner passes the group");

    assert_eq!(
        by_permission.and_then(|context| context.options().get("count").cloned()),
        Some(json!(10))
    );
    assert_eq!(
        by_ownership.and_then(|context| context.options().get("count").cloned()),
        Some(json!(20))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checks_stop_the_invocation_before_argument_errors(cache: InMemoryEntityCache) {
    let result = invoke(&cache, "!purge lots").await;

    assert!(matches!(
        result,
        Err(InvocationError::Check(CheckError::Failed(CheckFailure::Exclusive(_))))
    ));
}
