//! Lookup table models: roles, ticket states and ticket change types.

use serde::{Deserialize, Serialize};

use crate::server::model::db::{RoleModel, StateModel, TicketChangeTypeModel};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub role_id: i64,
    pub role_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    pub state_id: i64,
    pub state_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketChangeTypeDto {
    pub ticket_change_type_id: i64,
    pub ticket_change_type_name: Option<String>,
}

impl From<RoleModel> for RoleDto {
    fn from(role: RoleModel) -> Self {
        Self {
            role_id: role.id,
            role_name: role.role_name,
        }
    }
}

impl From<StateModel> for StateDto {
    fn from(state: StateModel) -> Self {
        Self {
            state_id: state.id,
            state_name: state.state_name,
        }
    }
}

impl From<TicketChangeTypeModel> for TicketChangeTypeDto {
    fn from(change_type: TicketChangeTypeModel) -> Self {
        Self {
            ticket_change_type_id: change_type.id,
            ticket_change_type_name: change_type.ticket_change_type_name,
        }
    }
}
