use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::note::NotePayload, server::model::db::NoteModel};

pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    /// Creates a new instance of [`NoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, note: &NotePayload) -> Result<NoteModel, DbErr> {
        let note = entity::note::ActiveModel {
            note_text: ActiveValue::Set(note.note_text.clone()),
            ticket_id: ActiveValue::Set(note.ticket_id),
            note_owner_id: ActiveValue::Set(note.note_owner_id),
            ..Default::default()
        };

        note.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<NoteModel>, DbErr> {
        entity::prelude::Note::find()
            .order_by_asc(entity::note::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, note_id: i64) -> Result<Option<NoteModel>, DbErr> {
        entity::prelude::Note::find_by_id(note_id).one(self.db).await
    }

    /// Gets every note attached to one of the provided tickets, ordered by note ID
    pub async fn get_by_ticket_ids(&self, ticket_ids: &[i64]) -> Result<Vec<NoteModel>, DbErr> {
        if ticket_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Note::find()
            .filter(entity::note::Column::TicketId.is_in(ticket_ids.iter().copied()))
            .order_by_asc(entity::note::Column::Id)
            .all(self.db)
            .await
    }
}
