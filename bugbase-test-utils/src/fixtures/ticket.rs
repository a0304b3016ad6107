use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn ticket<'a>(&'a self) -> TicketFixtures<'a> {
        TicketFixtures { setup: self }
    }
}

/// Fixtures for tickets and the rows attached to them
pub struct TicketFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TicketFixtures<'a> {
    pub async fn insert_ticket(
        &self,
        title: &str,
        state_id: Option<i64>,
        assigned_to_id: Option<i64>,
    ) -> Result<entity::ticket::Model, TestError> {
        Ok(entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
            title: ActiveValue::Set(Some(title.to_string())),
            description: ActiveValue::Set(Some(format!("Description of {}", title))),
            state_id: ActiveValue::Set(state_id),
            assigned_to_id: ActiveValue::Set(assigned_to_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_note(
        &self,
        note_text: &str,
        ticket_id: Option<i64>,
        note_owner_id: Option<i64>,
    ) -> Result<entity::note::Model, TestError> {
        Ok(entity::prelude::Note::insert(entity::note::ActiveModel {
            note_text: ActiveValue::Set(Some(note_text.to_string())),
            ticket_id: ActiveValue::Set(ticket_id),
            note_owner_id: ActiveValue::Set(note_owner_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a change history row snapshotting the current fields of the ticket
    ///
    /// The ticket must exist.
    pub async fn insert_ticket_change_history(
        &self,
        ticket_id: i64,
        ticket_change_type_id: Option<i64>,
    ) -> Result<entity::ticket_change_history::Model, TestError> {
        let ticket = entity::prelude::Ticket::find_by_id(ticket_id)
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("ticket {} for change history", ticket_id))
            })?;

        Ok(entity::prelude::TicketChangeHistory::insert(
            entity::ticket_change_history::ActiveModel {
                ticket_change_type_id: ActiveValue::Set(ticket_change_type_id),
                ticket_id: ActiveValue::Set(Some(ticket.id)),
                change_date_time: ActiveValue::Set(Some(Utc::now().naive_utc())),
                title: ActiveValue::Set(ticket.title),
                description: ActiveValue::Set(ticket.description),
                product: ActiveValue::Set(ticket.product),
                feature: ActiveValue::Set(ticket.feature),
                iteration: ActiveValue::Set(ticket.iteration),
                state_id: ActiveValue::Set(ticket.state_id),
                qa_owner_id: ActiveValue::Set(ticket.qa_owner_id),
                dev_owner_id: ActiveValue::Set(ticket.dev_owner_id),
                assigned_to_id: ActiveValue::Set(ticket.assigned_to_id),
                note_text: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
