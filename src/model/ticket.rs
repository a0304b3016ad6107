use serde::{Deserialize, Serialize};

use crate::{
    model::{
        lookup::StateDto, note::NoteDto, ticket_change_history::TicketChangeHistoryDto,
        user::UserDto,
    },
    server::model::db::TicketModel,
};

/// A ticket without related rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub ticket_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub product: Option<String>,
    pub feature: Option<String>,
    pub iteration: Option<String>,
    pub state_id: Option<i64>,
    pub qa_owner_id: Option<i64>,
    pub dev_owner_id: Option<i64>,
    pub assigned_to_id: Option<i64>,
}

/// A ticket with its users, state, notes and change history inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetailDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub assigned_to: Option<UserDto>,
    pub dev_owner: Option<UserDto>,
    pub qa_owner: Option<UserDto>,
    pub state: Option<StateDto>,
    pub notes: Vec<NoteDto>,
    pub ticket_change_histories: Vec<TicketChangeHistoryDto>,
}

/// Fields accepted when creating or replacing a ticket.
///
/// `product`, `feature` and `iteration` are not bound; they are written as null.
/// Each foreign key may be sent under its id name (`stateId`) or its
/// relation name (`state`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "state")]
    pub state_id: Option<i64>,
    #[serde(alias = "qaOwner")]
    pub qa_owner_id: Option<i64>,
    #[serde(alias = "devOwner")]
    pub dev_owner_id: Option<i64>,
    #[serde(alias = "assignedTo")]
    pub assigned_to_id: Option<i64>,
}

impl From<TicketModel> for TicketDto {
    fn from(ticket: TicketModel) -> Self {
        Self {
            ticket_id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            product: ticket.product,
            feature: ticket.feature,
            iteration: ticket.iteration,
            state_id: ticket.state_id,
            qa_owner_id: ticket.qa_owner_id,
            dev_owner_id: ticket.dev_owner_id,
            assigned_to_id: ticket.assigned_to_id,
        }
    }
}
