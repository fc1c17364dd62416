// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn home_page_renders() {
    let db = init_test_db();

    let mut resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("steamslack"), "body was: {body}");
}

#[test]
fn command_help_page_lists_the_commands() {
    let db = init_test_db();

    let mut resp = handle(get("/slack"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("/steam"));
    assert!(body.contains("/lift"));
    assert!(body.contains("/watch"));
}

#[test]
fn asciimo_still_lives() {
    let db = init_test_db();

    let mut resp = handle(get("/asciimo"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("http://i.imgur.com/kmbjB.png"));
}

#[test]
fn unknown_routes_are_not_found() {
    let db = init_test_db();

    match handle(get("/nope"), &db) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
