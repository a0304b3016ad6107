use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDetailDto, UserPayload},
    },
    server::{
        controller::util::{not_found::not_found, payload::Payload},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "Users";

/// Get all users with their role
#[utoipa::path(
    get,
    path = "/api/Users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user with their role
#[utoipa::path(
    get,
    path = "/api/Users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDetailDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match UserService::new(&state.db).get_user(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Ok(not_found("User", id)),
    }
}

/// Create a user
///
/// # Responses
/// - 200 (OK): The created user, read back with its role
/// - 400 (Bad Request): Body isn't a valid user payload, the submitted payload is echoed
/// - 500 (Internal Server Error): Insert failed, e.g. the user name is taken or the role
///   doesn't exist
#[utoipa::path(
    post,
    path = "/api/Users",
    tag = USER_TAG,
    request_body = UserPayload,
    responses(
        (status = 200, description = "Success when creating user", body = UserDetailDto),
        (status = 400, description = "Invalid payload, echoed back", body = UserPayload),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(&payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Replace a user's fields
///
/// Every field missing from the payload is cleared, the ID in the path is used even if the
/// body carries a `userId`.
#[utoipa::path(
    patch,
    path = "/api/Users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Success when updating user", body = UserDetailDto),
        (status = 400, description = "Invalid payload, echoed back", body = UserPayload),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    match UserService::new(&state.db).update_user(id, &payload).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Ok(not_found("User", id)),
    }
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/Users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    if UserService::new(&state.db).delete_user(id).await? {
        Ok(StatusCode::OK.into_response())
    } else {
        Ok(not_found("User", id))
    }
}
