use bugbase::{
    model::note::NotePayload,
    server::controller::note::{create_note, get_note, get_notes},
};

use super::*;

/// Expect 200 when adding a note to an existing ticket
#[tokio::test]
async fn create_note_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let ticket = test.ticket().insert_ticket("Bad Bug", None, None).await?;

    let result = create_note(
        State(test.into_app_state()),
        Payload(NotePayload {
            note_text: Some("repro steps".to_string()),
            ticket_id: Some(ticket.id),
            note_owner_id: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for an existing note & 404 for a missing one
#[tokio::test]
async fn get_note_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;
    let note = test.ticket().insert_note("loose note", None, None).await?;

    let result = get_note(State(test.to_app_state()), Path(note.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_note(State(test.to_app_state()), Path(note.id + 1)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    let result = get_notes(State(test.into_app_state())).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
