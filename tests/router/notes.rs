use super::*;

/// Expect a note to show up under its ticket and to inline its ticket & owner
#[tokio::test]
async fn note_is_attached_to_ticket() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_role("Tester")
        .build()
        .await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        "POST",
        "/api/Users",
        Some(r#"{"userName":"jdoe","role":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, ticket) = send(
        &app,
        "POST",
        "/api/Tickets",
        Some(r#"{"title":"Bad Bug","qaOwner":1,"devOwner":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["ticketId"], json!(1));
    assert_eq!(ticket["notes"], json!([]));

    let (status, note) = send(
        &app,
        "POST",
        "/api/Notes",
        Some(r#"{"noteText":"repro steps","ticketId":1,"noteOwnerId":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["noteId"], json!(1));

    let (status, ticket) = send(&app, "GET", "/api/Tickets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["notes"][0]["noteText"], json!("repro steps"));
    assert_eq!(ticket["qaOwner"]["userName"], json!("jdoe"));
    assert_eq!(ticket["devOwner"]["userId"], json!(1));
    assert_eq!(ticket["assignedTo"], Value::Null);
    assert_eq!(ticket["ticketChangeHistories"], json!([]));

    let (status, note) = send(&app, "GET", "/api/Notes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["ticket"]["title"], json!("Bad Bug"));
    assert_eq!(note["noteOwner"]["userName"], json!("jdoe"));

    Ok(())
}

/// Expect a note on a missing ticket to fail at insert
#[tokio::test]
async fn note_on_unknown_ticket_is_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        "POST",
        "/api/Notes",
        Some(r#"{"noteText":"orphan","ticketId":42}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}
