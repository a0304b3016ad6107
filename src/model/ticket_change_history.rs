use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        lookup::{StateDto, TicketChangeTypeDto},
        ticket::TicketDto,
        user::UserDto,
    },
    server::model::db::TicketChangeHistoryModel,
};

/// One audit record: a snapshot of a ticket's fields at the time of a change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketChangeHistoryDto {
    pub ticket_change_history_id: i64,
    pub ticket_change_type_id: Option<i64>,
    pub ticket_id: Option<i64>,
    pub change_date_time: Option<NaiveDateTime>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub product: Option<String>,
    pub feature: Option<String>,
    pub iteration: Option<String>,
    pub state_id: Option<i64>,
    pub qa_owner_id: Option<i64>,
    pub dev_owner_id: Option<i64>,
    pub assigned_to_id: Option<i64>,
    pub note_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketChangeHistoryDetailDto {
    #[serde(flatten)]
    pub history: TicketChangeHistoryDto,
    pub ticket: Option<TicketDto>,
    pub ticket_change_type: Option<TicketChangeTypeDto>,
    pub state: Option<StateDto>,
    pub qa_owner: Option<UserDto>,
    pub dev_owner: Option<UserDto>,
    pub assigned_to: Option<UserDto>,
}

impl From<TicketChangeHistoryModel> for TicketChangeHistoryDto {
    fn from(history: TicketChangeHistoryModel) -> Self {
        Self {
            ticket_change_history_id: history.id,
            ticket_change_type_id: history.ticket_change_type_id,
            ticket_id: history.ticket_id,
            change_date_time: history.change_date_time,
            title: history.title,
            description: history.description,
            product: history.product,
            feature: history.feature,
            iteration: history.iteration,
            state_id: history.state_id,
            qa_owner_id: history.qa_owner_id,
            dev_owner_id: history.dev_owner_id,
            assigned_to_id: history.assigned_to_id,
            note_text: history.note_text,
        }
    }
}
