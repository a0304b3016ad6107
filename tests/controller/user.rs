use bugbase::{
    model::user::UserPayload,
    server::controller::user::{create_user, delete_user, get_user, get_users, update_user},
};

use super::*;

/// Expect 200 for an existing user
#[tokio::test]
async fn get_user_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_role("Tester")
        .build()
        .await?;
    let user = test.user().insert_user("jdoe", Some(1)).await?;

    let result = get_user(State(test.into_app_state()), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn get_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = get_user(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the tables are missing
#[tokio::test]
async fn get_users_returns_internal_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 when creating a user
#[tokio::test]
async fn create_user_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Payload(UserPayload {
            user_name: Some("jdoe".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 500 when the user name is taken
#[tokio::test]
async fn create_user_returns_internal_error_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    test.user().insert_user("jdoe", None).await?;

    let result = create_user(
        State(test.into_app_state()),
        Payload(UserPayload {
            user_name: Some("jdoe".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 404 when updating a user that does not exist
#[tokio::test]
async fn update_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = update_user(
        State(test.into_app_state()),
        Path(1),
        Payload(UserPayload::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 when deleting a user, then 404 when deleting it again
#[tokio::test]
async fn delete_user_returns_ok_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let user = test.user().insert_user("jdoe", None).await?;

    let result = delete_user(State(test.to_app_state()), Path(user.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = delete_user(State(test.into_app_state()), Path(user.id)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
