use super::*;

/// Expect a created user to read back with its role inlined
#[tokio::test]
async fn created_user_reads_back_with_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_role("Tester")
        .build()
        .await?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        "POST",
        "/api/Users",
        Some(r#"{"userName":"jdoe","role":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["userId"], json!(1));

    let (status, user) = send(&app, "GET", "/api/Users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["userName"], json!("jdoe"));
    assert_eq!(user["roleId"], json!(1));
    assert_eq!(user["role"], json!({ "roleId": 1, "roleName": "Tester" }));

    Ok(())
}

/// Expect the list to hold exactly the users created and not deleted
#[tokio::test]
async fn list_reflects_creates_and_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    send(&app, "POST", "/api/Users", Some(r#"{"userName":"a"}"#)).await;
    send(&app, "POST", "/api/Users", Some(r#"{"userName":"b"}"#)).await;

    let (status, body) = send(&app, "DELETE", "/api/Users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, users) = send(&app, "GET", "/api/Users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().map(|u| u.len()), Some(1));
    assert_eq!(users[0]["userName"], json!("b"));

    let (status, body) = send(&app, "GET", "/api/Users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User 1 not found" }));

    let (status, _) = send(&app, "DELETE", "/api/Users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a duplicate user name to fail with a generic 500
#[tokio::test]
async fn duplicate_user_name_is_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, _) = send(&app, "POST", "/api/Users", Some(r#"{"userName":"jdoe"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/Users", Some(r#"{"userName":"jdoe"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}

/// Expect the path ID to win over an ID in the body
#[tokio::test]
async fn patch_uses_path_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    test.user().insert_user("first", None).await?;
    test.user().insert_user("second", None).await?;
    let app = app(&test);

    let (status, user) = send(
        &app,
        "PATCH",
        "/api/Users/1",
        Some(r#"{"userId":2,"userName":"renamed","email":"r@example.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["userId"], json!(1));
    assert_eq!(user["userName"], json!("renamed"));
    assert_eq!(user["displayName"], Value::Null);

    let (_, untouched) = send(&app, "GET", "/api/Users/2", None).await;
    assert_eq!(untouched["userName"], json!("second"));

    let (status, _) = send(&app, "PATCH", "/api/Users/3", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
