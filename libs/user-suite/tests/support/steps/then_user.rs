use cucumber::then;
use petstore_client::{ApiResponse, PetstoreError};
use user_suite::LifecycleState;

use crate::support::world::UserWorld;

fn last_response(world: &UserWorld) -> &ApiResponse {
    match (&world.last_response, &world.error) {
        (Some(response), _) => response,
        (None, Some(err)) => panic!("last step failed: {err}"),
        (None, None) => panic!("no step has run yet"),
    }
}

#[then(expr = "the status should be {int}")]
pub async fn status_is(world: &mut UserWorld, status: u16) {
    assert_eq!(last_response(world).status_code(), status);
}

#[then(expr = "the status should not be {int}")]
pub async fn status_is_not(world: &mut UserWorld, status: u16) {
    assert_ne!(last_response(world).status_code(), status);
}

#[then(expr = "the step should fail at {word} expecting {int} but got {int}")]
pub async fn step_failed_with(world: &mut UserWorld, step_name: String, expected: u16, actual: u16) {
    match &world.error {
        Some(PetstoreError::UnexpectedStatus {
            operation,
            expected: want,
            actual: got,
            ..
        }) => {
            assert_eq!(*operation, step_name);
            assert_eq!((*want, *got), (expected, actual));
        }
        Some(other) => panic!("unexpected error: {other}"),
        None => panic!("last step succeeded"),
    }
}

#[then(expr = "the body should contain the username {string}")]
pub async fn body_has_username(world: &mut UserWorld, username: String) {
    let expected = format!(r#""username":"{username}""#);
    let body = last_response(world).body();
    assert!(body.contains(&expected), "body {body} lacks {expected}");
}

#[then(expr = "the body should contain {string}")]
pub async fn body_contains(world: &mut UserWorld, text: String) {
    let body = last_response(world).body();
    assert!(body.contains(&text), "body {body} lacks {text}");
}

#[then(expr = "the user should be {word}")]
pub async fn user_state(world: &mut UserWorld, state: String) {
    let lifecycle = world.lifecycle.as_ref().expect("lifecycle should exist");
    let expected = match state.as_str() {
        "created" => LifecycleState::Created,
        "updated" => LifecycleState::Updated,
        "deleted" => LifecycleState::Deleted,
        other => panic!("unknown lifecycle state: {other}"),
    };
    assert_eq!(lifecycle.state(), expected);
}
