use serde::{Deserialize, Serialize};

use crate::{
    model::{ticket::TicketDto, user::UserDto},
    server::model::db::NoteModel,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub note_id: i64,
    pub note_text: Option<String>,
    pub ticket_id: Option<i64>,
    pub note_owner_id: Option<i64>,
}

/// A note with the ticket it annotates and its author inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetailDto {
    #[serde(flatten)]
    pub note: NoteDto,
    pub ticket: Option<TicketDto>,
    pub note_owner: Option<UserDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub note_text: Option<String>,
    pub ticket_id: Option<i64>,
    pub note_owner_id: Option<i64>,
}

impl From<NoteModel> for NoteDto {
    fn from(note: NoteModel) -> Self {
        Self {
            note_id: note.id,
            note_text: note.note_text,
            ticket_id: note.ticket_id,
            note_owner_id: note.note_owner_id,
        }
    }
}
