use sea_orm::DatabaseConnection;

use crate::{
    model::note::{NoteDetailDto, NotePayload},
    server::{
        data::note::NoteRepository,
        error::Error,
        model::db::NoteModel,
        service::relation::{lookup, tickets_by_id, users_by_id},
    },
};

/// Service for notes attached to tickets.
pub struct NoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteService<'a> {
    /// Creates a new instance of [`NoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every note with its ticket & owner inlined, ordered by note ID
    pub async fn get_notes(&self) -> Result<Vec<NoteDetailDto>, Error> {
        let notes = NoteRepository::new(self.db).get_all().await?;

        self.with_relations(notes).await
    }

    /// Retrieves a note with its ticket & owner inlined, `None` if no note has `note_id`
    pub async fn get_note(&self, note_id: i64) -> Result<Option<NoteDetailDto>, Error> {
        let Some(note) = NoteRepository::new(self.db).get_by_id(note_id).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![note]).await?.pop())
    }

    /// Creates a note and returns it with its ticket & owner inlined
    ///
    /// An unknown ticket or owner ID is rejected by the database as `Err(Error::DbErr)`.
    pub async fn create_note(&self, payload: &NotePayload) -> Result<NoteDetailDto, Error> {
        let note = NoteRepository::new(self.db).create(payload).await?;

        tracing::debug!("Created note ID {} on ticket ID {:?}", note.id, note.ticket_id);

        self.with_relations(vec![note]).await?.pop().ok_or_else(|| {
            Error::InternalError("Created note missing after attaching relations".to_string())
        })
    }

    async fn with_relations(&self, notes: Vec<NoteModel>) -> Result<Vec<NoteDetailDto>, Error> {
        let tickets = tickets_by_id(self.db, notes.iter().map(|note| note.ticket_id)).await?;
        let users = users_by_id(self.db, notes.iter().map(|note| note.note_owner_id)).await?;

        Ok(notes
            .into_iter()
            .map(|note| NoteDetailDto {
                ticket: lookup(&tickets, note.ticket_id),
                note_owner: lookup(&users, note.note_owner_id),
                note: note.into(),
            })
            .collect())
    }
}
