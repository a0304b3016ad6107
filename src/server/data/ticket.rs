use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::ticket::TicketPayload, server::model::db::TicketModel};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, ticket: &TicketPayload) -> Result<TicketModel, DbErr> {
        Self::active_model(ticket).insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<TicketModel>, DbErr> {
        entity::prelude::Ticket::find()
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, ticket_id: i64) -> Result<Option<TicketModel>, DbErr> {
        entity::prelude::Ticket::find_by_id(ticket_id)
            .one(self.db)
            .await
    }

    /// Gets the tickets with the provided IDs, IDs without a ticket are skipped
    pub async fn get_many_by_ids(&self, ticket_ids: &[i64]) -> Result<Vec<TicketModel>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::Id.is_in(ticket_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn exists(&self, ticket_id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Ticket::find_by_id(ticket_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces every bound field of a ticket, `None` fields are written as NULL
    ///
    /// Returns [`DbErr::RecordNotUpdated`] when no ticket with `ticket_id` was updated.
    pub async fn update(
        &self,
        ticket_id: i64,
        ticket: &TicketPayload,
    ) -> Result<TicketModel, DbErr> {
        let mut active = Self::active_model(ticket);
        active.id = ActiveValue::Set(ticket_id);

        active.update(self.db).await
    }

    /// Deletes a ticket
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether a ticket was removed.
    pub async fn delete(&self, ticket_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ticket::delete_by_id(ticket_id)
            .exec(self.db)
            .await
    }

    fn active_model(ticket: &TicketPayload) -> entity::ticket::ActiveModel {
        entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(ticket.title.clone()),
            description: ActiveValue::Set(ticket.description.clone()),
            product: ActiveValue::Set(None),
            feature: ActiveValue::Set(None),
            iteration: ActiveValue::Set(None),
            state_id: ActiveValue::Set(ticket.state_id),
            qa_owner_id: ActiveValue::Set(ticket.qa_owner_id),
            dev_owner_id: ActiveValue::Set(ticket.dev_owner_id),
            assigned_to_id: ActiveValue::Set(ticket.assigned_to_id),
        }
    }
}
