use sea_orm::DatabaseConnection;

use crate::{
    model::ticket_change_history::TicketChangeHistoryDetailDto,
    server::{
        data::ticket_change_history::TicketChangeHistoryRepository,
        error::Error,
        model::db::TicketChangeHistoryModel,
        service::relation::{
            lookup, states_by_id, ticket_change_types_by_id, tickets_by_id, users_by_id,
        },
    },
};

/// Read access to the ticket audit trail.
///
/// The API never writes history rows.
pub struct TicketChangeHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketChangeHistoryService<'a> {
    /// Creates a new instance of [`TicketChangeHistoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every history row with its relations inlined, ordered by history ID
    pub async fn get_ticket_change_histories(
        &self,
    ) -> Result<Vec<TicketChangeHistoryDetailDto>, Error> {
        let histories = TicketChangeHistoryRepository::new(self.db).get_all().await?;

        self.with_relations(histories).await
    }

    /// Retrieves a history row with its relations inlined, `None` if `history_id` is unknown
    pub async fn get_ticket_change_history(
        &self,
        history_id: i64,
    ) -> Result<Option<TicketChangeHistoryDetailDto>, Error> {
        let Some(history) = TicketChangeHistoryRepository::new(self.db)
            .get_by_id(history_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![history]).await?.pop())
    }

    async fn with_relations(
        &self,
        histories: Vec<TicketChangeHistoryModel>,
    ) -> Result<Vec<TicketChangeHistoryDetailDto>, Error> {
        let tickets = tickets_by_id(self.db, histories.iter().map(|h| h.ticket_id)).await?;
        let change_types =
            ticket_change_types_by_id(self.db, histories.iter().map(|h| h.ticket_change_type_id))
                .await?;
        let states = states_by_id(self.db, histories.iter().map(|h| h.state_id)).await?;
        let users = users_by_id(
            self.db,
            histories
                .iter()
                .flat_map(|h| [h.qa_owner_id, h.dev_owner_id, h.assigned_to_id]),
        )
        .await?;

        Ok(histories
            .into_iter()
            .map(|history| TicketChangeHistoryDetailDto {
                ticket: lookup(&tickets, history.ticket_id),
                ticket_change_type: lookup(&change_types, history.ticket_change_type_id),
                state: lookup(&states, history.state_id),
                qa_owner: lookup(&users, history.qa_owner_id),
                dev_owner: lookup(&users, history.dev_owner_id),
                assigned_to: lookup(&users, history.assigned_to_id),
                history: history.into(),
            })
            .collect())
    }
}
