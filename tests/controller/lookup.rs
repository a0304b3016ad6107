use bugbase::server::controller::{
    role::{get_role, get_roles},
    state::{get_state, get_states},
    ticket_change_type::{get_ticket_change_type, get_ticket_change_types},
};

use super::*;

/// Expect 200 for an existing role & 404 for a missing one
#[tokio::test]
async fn get_role_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_role("Tester")
        .build()
        .await?;

    let result = get_role(State(test.to_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_role(State(test.into_app_state()), Path(2)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for an existing state & 404 for a missing one
#[tokio::test]
async fn get_state_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_state("New")
        .build()
        .await?;

    let result = get_state(State(test.to_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_state(State(test.into_app_state()), Path(9)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for an existing ticket change type & 404 for a missing one
#[tokio::test]
async fn get_ticket_change_type_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_ticket_change_type("Created")
        .build()
        .await?;

    let result = get_ticket_change_type(State(test.to_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_ticket_change_type(State(test.into_app_state()), Path(2)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for every lookup list
#[tokio::test]
async fn lookup_lists_return_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let roles = get_roles(State(test.to_app_state())).await;
    let states = get_states(State(test.to_app_state())).await;
    let change_types = get_ticket_change_types(State(test.into_app_state())).await;

    assert_eq!(roles.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(states.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        change_types.unwrap().into_response().status(),
        StatusCode::OK
    );

    Ok(())
}
