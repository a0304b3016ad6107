use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, lookup::RoleDto},
    server::{
        controller::util::not_found::not_found, error::Error, model::app::AppState,
        service::lookup::RoleService,
    },
};

pub static ROLE_TAG: &str = "Roles";

/// Get all roles
#[utoipa::path(
    get,
    path = "/api/Roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving roles", body = Vec<RoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let roles = RoleService::new(&state.db).get_roles().await?;

    Ok((StatusCode::OK, Json(roles)))
}

/// Get a role
#[utoipa::path(
    get,
    path = "/api/Roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Success when retrieving role", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match RoleService::new(&state.db).get_role(id).await? {
        Some(role) => Ok((StatusCode::OK, Json(role)).into_response()),
        None => Ok(not_found("Role", id)),
    }
}
