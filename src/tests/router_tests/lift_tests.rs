// src/tests/router_tests/lift_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, set_command_token, TEST_TOKEN};

#[test]
fn wrong_token_gets_the_bad_token_page() {
    let db = init_test_db();
    set_command_token();

    let mut resp = handle(
        get("/slack/lift?token=wrong&user_name=boomdog83&text=status"),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Bad Token"));
}

#[test]
fn missing_user_name_is_rejected() {
    let db = init_test_db();
    set_command_token();

    let result = handle(get(&format!("/slack/lift?token={TEST_TOKEN}")), &db);
    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("user_name")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn status_shows_default_stats_for_a_new_lifter() {
    let db = init_test_db();
    set_command_token();

    let mut resp = handle(
        get(&format!(
            "/slack/lift?token={TEST_TOKEN}&user_name=khan&text=status"
        )),
        &db,
    )
    .unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("khan"), "body was: {body}");
    assert!(body.contains("bench 100"));
    assert!(body.contains("deadlift 200"));
    assert!(body.contains("health 100"));
}

#[test]
fn a_set_replies_to_the_lifter_either_way() {
    let db = init_test_db();
    set_command_token();

    // gains and injuries are both fine, but it must answer the lifter
    let mut resp = handle(
        get(&format!(
            "/slack/lift?token={TEST_TOKEN}&user_name=mrpoopa&text=bench+3"
        )),
        &db,
    )
    .unwrap();

    let body = body_string(&mut resp);
    assert!(body.starts_with("mrpoopa"), "body was: {body}");
}

#[test]
fn unknown_exercise_is_rejected_with_the_menu() {
    let db = init_test_db();
    set_command_token();

    let result = handle(
        get(&format!(
            "/slack/lift?token={TEST_TOKEN}&user_name=rob&text=curls"
        )),
        &db,
    );
    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("curls")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
