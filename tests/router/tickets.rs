use sea_orm::{ActiveValue, EntityTrait};

use super::*;

/// Expect a state-only patch to clear every other bound ticket field
#[tokio::test]
async fn patch_replaces_ticket_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_state("New")
        .with_state("Open")
        .with_state("In Progress")
        .with_state("Resolved")
        .with_state("Closed")
        .build()
        .await?;
    test.user().insert_user("jdoe", None).await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        "POST",
        "/api/Tickets",
        Some(r#"{"title":"Bad Bug","description":"It crashes","qaOwner":1,"devOwner":1,"state":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, ticket) = send(&app, "PATCH", "/api/Tickets/1", Some(r#"{"stateId":5}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["ticketId"], json!(1));
    assert_eq!(ticket["stateId"], json!(5));
    assert_eq!(ticket["state"]["stateName"], json!("Closed"));
    assert_eq!(ticket["title"], Value::Null);
    assert_eq!(ticket["description"], Value::Null);
    assert_eq!(ticket["qaOwnerId"], Value::Null);
    assert_eq!(ticket["qaOwner"], Value::Null);

    Ok(())
}

/// Expect product, feature & iteration to be ignored on create & cleared on update
#[tokio::test]
async fn unbound_ticket_fields_are_not_stored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, ticket) = send(
        &app,
        "POST",
        "/api/Tickets",
        Some(r#"{"title":"x","product":"P","feature":"F","iteration":"I"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["title"], json!("x"));
    assert_eq!(ticket["product"], Value::Null);
    assert_eq!(ticket["feature"], Value::Null);
    assert_eq!(ticket["iteration"], Value::Null);

    entity::prelude::Ticket::update(entity::ticket::ActiveModel {
        id: ActiveValue::Unchanged(1),
        product: ActiveValue::Set(Some("P".to_string())),
        ..Default::default()
    })
    .exec(&test.db)
    .await?;

    let (status, ticket) = send(
        &app,
        "PATCH",
        "/api/Tickets/1",
        Some(r#"{"title":"y","product":"Q"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["title"], json!("y"));
    assert_eq!(ticket["product"], Value::Null);

    Ok(())
}

/// Expect a deleted ticket to be gone & a second delete to be not found
#[tokio::test]
async fn delete_ticket_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    test.ticket().insert_ticket("Bad Bug", None, None).await?;
    let app = app(&test);

    let (status, _) = send(&app, "DELETE", "/api/Tickets/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/Tickets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Ticket 1 not found" }));

    let (status, _) = send(&app, "DELETE", "/api/Tickets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a ticket referencing a missing state to fail at insert
#[tokio::test]
async fn ticket_with_unknown_state_is_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let app = app(&test);

    let (status, _) = send(&app, "POST", "/api/Tickets", Some(r#"{"title":"x","stateId":9}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, tickets) = send(&app, "GET", "/api/Tickets", None).await;
    assert_eq!(tickets, json!([]));

    Ok(())
}
