use serde::{Deserialize, Serialize};

use crate::{model::lookup::RoleDto, server::model::db::UserModel};

/// A user account without related rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: i64,
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
}

/// A user account with its role inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub role: Option<RoleDto>,
}

/// Fields accepted when creating or replacing a user.
///
/// Any other field in the request body, including `userId`, is ignored. The
/// role may be sent either as `roleId` or as `role`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "role")]
    pub role_id: Option<i64>,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            user_id: user.id,
            user_name: user.user_name,
            display_name: user.display_name,
            email: user.email,
            phone: user.phone,
            role_id: user.role_id,
        }
    }
}
