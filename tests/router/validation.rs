use super::*;

/// Expect a wrongly typed field to be rejected with the payload echoed back
#[tokio::test]
async fn wrong_field_type_echoes_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        "POST",
        "/api/Tickets",
        Some(r#"{"title":"Bad Bug","stateId":"open"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "title": "Bad Bug", "stateId": "open" }));

    let (_, tickets) = send(&app, "GET", "/api/Tickets", None).await;
    assert_eq!(tickets, json!([]));

    Ok(())
}

/// Expect a JSON value that isn't an object to be rejected & echoed back
#[tokio::test]
async fn non_object_body_echoes_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, "POST", "/api/Notes", Some(r#""just text""#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!("just text"));

    Ok(())
}

/// Expect a body that isn't JSON to get an error message
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, "PATCH", "/api/Users/1", Some("{userName:")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let (status, doc) = send(&app, "GET", "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/Tickets/{id}"].is_object());
    assert!(doc["paths"]["/api/Users"]["post"].is_object());

    Ok(())
}
