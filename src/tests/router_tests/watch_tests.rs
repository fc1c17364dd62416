// src/tests/router_tests/watch_tests.rs

use crate::db::watches;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, set_command_token, TEST_TOKEN};

fn watch_cmd(text: &str) -> String {
    let encoded: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("token", TEST_TOKEN)
        .append_pair("user_name", "boomdog83")
        .append_pair("text", text)
        .finish();
    format!("/slack/watch?{encoded}")
}

#[test]
fn registering_a_watch_persists_rules_and_requester() {
    let db = init_test_db();
    set_command_token();

    let mut resp = handle(
        get(&watch_cmd(
            "Shav's | info.fullName=Shavronne's Wrappings Occultist's Vestment | search/abc123",
        )),
        &db,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("Watching 'Shav's'"));

    let stored = watches::list_watches(&db).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].search_title, "Shav's");
    assert_eq!(stored[0].requester, "boomdog83");
    assert_eq!(stored[0].search_url, "search/abc123");
    assert_eq!(
        stored[0].search_rules,
        vec![(
            "info.fullName".to_string(),
            "Shavronne's Wrappings Occultist's Vestment".to_string()
        )]
    );
}

#[test]
fn duplicate_titles_are_reported_not_overwritten() {
    let db = init_test_db();
    set_command_token();

    handle(get(&watch_cmd("Kaom's | info.fullName=Kaom's Heart | k1")), &db).unwrap();

    let mut resp = handle(
        get(&watch_cmd("Kaom's | info.fullName=Something Else | k2")),
        &db,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("already being watched"));

    let stored = watches::list_watches(&db).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].search_url, "k1");
}

#[test]
fn listing_and_unwatching_round_trip() {
    let db = init_test_db();
    set_command_token();

    handle(get(&watch_cmd("Kaom's | info.fullName=Kaom's Heart | k1")), &db).unwrap();
    handle(get(&watch_cmd("Doctor | info.fullName=The Doctor | d1")), &db).unwrap();

    let mut resp = handle(get(&watch_cmd("watches")), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Kaom's"));
    assert!(body.contains("Doctor"));

    let mut resp = handle(get(&watch_cmd("unwatch Kaom's")), &db).unwrap();
    assert!(body_string(&mut resp).contains("Stopped watching"));

    let mut resp = handle(get(&watch_cmd("unwatch Kaom's")), &db).unwrap();
    assert!(body_string(&mut resp).contains("Never heard of"));

    assert_eq!(watches::list_watches(&db).unwrap().len(), 1);
}

#[test]
fn malformed_registrations_are_rejected() {
    let db = init_test_db();
    set_command_token();

    // missing the url part
    match handle(get(&watch_cmd("Shav's | info.fullName=Whatever")), &db) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("usage")),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    // rule without a value
    match handle(get(&watch_cmd("Shav's | fullName | search/x")), &db) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("fullName")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
