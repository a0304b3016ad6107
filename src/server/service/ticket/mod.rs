//! Ticket service layer.
//!
//! Tickets are read with their three users, their state, their notes and their change
//! history inlined. Every related set is loaded with one batch query per relation for the
//! whole page of tickets.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        note::NoteDto,
        ticket::{TicketDetailDto, TicketPayload},
        ticket_change_history::TicketChangeHistoryDto,
    },
    server::{
        data::{
            note::NoteRepository, ticket::TicketRepository,
            ticket_change_history::TicketChangeHistoryRepository,
        },
        error::Error,
        model::db::TicketModel,
        service::relation::{lookup, states_by_id, users_by_id},
    },
};

/// Service for managing tickets.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every ticket with its related rows inlined, ordered by ticket ID.
    pub async fn get_tickets(&self) -> Result<Vec<TicketDetailDto>, Error> {
        let tickets = TicketRepository::new(self.db).get_all().await?;

        self.with_relations(tickets).await
    }

    /// Retrieves a ticket with its related rows inlined.
    ///
    /// # Returns
    /// - `Ok(Some(TicketDetailDto))` - Ticket found
    /// - `Ok(None)` - No ticket with `ticket_id`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_ticket(&self, ticket_id: i64) -> Result<Option<TicketDetailDto>, Error> {
        let Some(ticket) = TicketRepository::new(self.db).get_by_id(ticket_id).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![ticket]).await?.pop())
    }

    /// Creates a ticket and returns it as read back from the database.
    ///
    /// Unknown user or state IDs are rejected by the database as `Err(Error::DbErr)`.
    pub async fn create_ticket(&self, payload: &TicketPayload) -> Result<TicketDetailDto, Error> {
        let ticket = TicketRepository::new(self.db).create(payload).await?;
        let ticket_id = ticket.id;

        tracing::debug!("Created ticket ID {}", ticket_id);

        self.get_ticket(ticket_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to read back ticket ID {} after creating it",
                ticket_id
            ))
        })
    }

    /// Replaces the bound fields of a ticket.
    ///
    /// # Returns
    /// - `Ok(Some(TicketDetailDto))` - The updated ticket
    /// - `Ok(None)` - No ticket with `ticket_id`
    /// - `Err(Error::InternalError)` - The update affected no row although the ticket exists
    /// - `Err(Error::DbErr)` - Update failed, e.g. unknown user or state
    pub async fn update_ticket(
        &self,
        ticket_id: i64,
        payload: &TicketPayload,
    ) -> Result<Option<TicketDetailDto>, Error> {
        let ticket_repo = TicketRepository::new(self.db);

        match ticket_repo.update(ticket_id, payload).await {
            Ok(_) => self.get_ticket(ticket_id).await,
            Err(DbErr::RecordNotUpdated) => {
                if ticket_repo.exists(ticket_id).await? {
                    return Err(Error::InternalError(format!(
                        "Update of ticket ID {} affected no rows although the ticket exists",
                        ticket_id
                    )));
                }

                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a ticket, returning `false` when no ticket with `ticket_id` exists.
    ///
    /// A ticket that still has notes or change history is rejected by the database.
    pub async fn delete_ticket(&self, ticket_id: i64) -> Result<bool, Error> {
        let result = TicketRepository::new(self.db).delete(ticket_id).await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_relations(
        &self,
        tickets: Vec<TicketModel>,
    ) -> Result<Vec<TicketDetailDto>, Error> {
        if tickets.is_empty() {
            return Ok(Vec::new());
        }

        let ticket_ids: Vec<i64> = tickets.iter().map(|ticket| ticket.id).collect();

        let users = users_by_id(
            self.db,
            tickets.iter().flat_map(|ticket| {
                [
                    ticket.assigned_to_id,
                    ticket.dev_owner_id,
                    ticket.qa_owner_id,
                ]
            }),
        )
        .await?;
        let states = states_by_id(self.db, tickets.iter().map(|ticket| ticket.state_id)).await?;

        let mut notes: HashMap<i64, Vec<NoteDto>> = HashMap::new();
        for note in NoteRepository::new(self.db)
            .get_by_ticket_ids(&ticket_ids)
            .await?
        {
            if let Some(ticket_id) = note.ticket_id {
                notes.entry(ticket_id).or_default().push(note.into());
            }
        }

        let mut histories: HashMap<i64, Vec<TicketChangeHistoryDto>> = HashMap::new();
        for history in TicketChangeHistoryRepository::new(self.db)
            .get_by_ticket_ids(&ticket_ids)
            .await?
        {
            if let Some(ticket_id) = history.ticket_id {
                histories
                    .entry(ticket_id)
                    .or_default()
                    .push(history.into());
            }
        }

        Ok(tickets
            .into_iter()
            .map(|ticket| TicketDetailDto {
                assigned_to: lookup(&users, ticket.assigned_to_id),
                dev_owner: lookup(&users, ticket.dev_owner_id),
                qa_owner: lookup(&users, ticket.qa_owner_id),
                state: lookup(&states, ticket.state_id),
                notes: notes.remove(&ticket.id).unwrap_or_default(),
                ticket_change_histories: histories.remove(&ticket.id).unwrap_or_default(),
                ticket: ticket.into(),
            })
            .collect())
    }
}
