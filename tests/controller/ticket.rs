use bugbase::{
    model::ticket::TicketPayload,
    server::controller::ticket::{
        create_ticket, delete_ticket, get_ticket, get_tickets, update_ticket,
    },
};

use super::*;

/// Expect 200 with tickets present
#[tokio::test]
async fn get_tickets_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    test.ticket().insert_ticket("Bad Bug", None, None).await?;

    let result = get_tickets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for a ticket that does not exist
#[tokio::test]
async fn get_ticket_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = get_ticket(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the ticket references a user that does not exist
#[tokio::test]
async fn create_ticket_returns_internal_error_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = create_ticket(
        State(test.into_app_state()),
        Payload(TicketPayload {
            title: Some("Bad Bug".to_string()),
            qa_owner_id: Some(1),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 when updating an existing ticket
#[tokio::test]
async fn update_ticket_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_state("Open")
        .build()
        .await?;
    let ticket = test.ticket().insert_ticket("Bad Bug", None, None).await?;

    let result = update_ticket(
        State(test.into_app_state()),
        Path(ticket.id),
        Payload(TicketPayload {
            state_id: Some(1),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 when deleting a ticket that does not exist
#[tokio::test]
async fn delete_ticket_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = delete_ticket(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when deleting a ticket that still has notes
#[tokio::test]
async fn delete_ticket_returns_internal_error_for_ticket_with_notes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let ticket = test.ticket().insert_ticket("Bad Bug", None, None).await?;
    test.ticket()
        .insert_note("repro steps", Some(ticket.id), None)
        .await?;

    let result = delete_ticket(State(test.into_app_state()), Path(ticket.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
