use bugbase::server::controller::ticket_change_history::{
    get_ticket_change_histories, get_ticket_change_history,
};

use super::*;

/// Expect 200 for an existing history entry
#[tokio::test]
async fn get_ticket_change_history_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_bugbase_tables()
        .with_ticket_change_type("Created")
        .build()
        .await?;
    let ticket = test.ticket().insert_ticket("Bad Bug", None, None).await?;
    let history = test
        .ticket()
        .insert_ticket_change_history(ticket.id, Some(1))
        .await?;

    let result = get_ticket_change_history(State(test.into_app_state()), Path(history.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for a history entry that does not exist
#[tokio::test]
async fn get_ticket_change_history_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_bugbase_tables().build().await?;

    let result = get_ticket_change_history(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the tables are missing
#[tokio::test]
async fn get_ticket_change_histories_returns_internal_error_without_tables(
) -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_ticket_change_histories(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
