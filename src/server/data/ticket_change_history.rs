use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::TicketChangeHistoryModel;

pub struct TicketChangeHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketChangeHistoryRepository<'a, C> {
    /// Creates a new instance of [`TicketChangeHistoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TicketChangeHistoryModel>, DbErr> {
        entity::prelude::TicketChangeHistory::find()
            .order_by_asc(entity::ticket_change_history::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        history_id: i64,
    ) -> Result<Option<TicketChangeHistoryModel>, DbErr> {
        entity::prelude::TicketChangeHistory::find_by_id(history_id)
            .one(self.db)
            .await
    }

    /// Gets the change history of the provided tickets, ordered by history ID
    pub async fn get_by_ticket_ids(
        &self,
        ticket_ids: &[i64],
    ) -> Result<Vec<TicketChangeHistoryModel>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TicketChangeHistory::find()
            .filter(
                entity::ticket_change_history::Column::TicketId.is_in(ticket_ids.iter().copied()),
            )
            .order_by_asc(entity::ticket_change_history::Column::Id)
            .all(self.db)
            .await
    }
}
