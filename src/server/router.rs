//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/Users`, `POST /api/Users`
/// - `GET|PATCH|DELETE /api/Users/{id}`
/// - `GET /api/Tickets`, `POST /api/Tickets`
/// - `GET|PATCH|DELETE /api/Tickets/{id}`
/// - `GET /api/Notes`, `POST /api/Notes`, `GET /api/Notes/{id}`
/// - `GET /api/Roles`, `GET /api/Roles/{id}`
/// - `GET /api/States`, `GET /api/States/{id}`
/// - `GET /api/TicketChangeTypes`, `GET /api/TicketChangeTypes/{id}`
/// - `GET /api/TicketChangeHistories`, `GET /api/TicketChangeHistories/{id}`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bugbase", description = "Bugbase bug tracking API"), tags(
        (name = controller::user::USER_TAG, description = "User accounts"),
        (name = controller::ticket::TICKET_TAG, description = "Bug tickets"),
        (name = controller::note::NOTE_TAG, description = "Notes attached to tickets"),
        (name = controller::role::ROLE_TAG, description = "User roles"),
        (name = controller::state::STATE_TAG, description = "Ticket states"),
        (name = controller::ticket_change_type::TICKET_CHANGE_TYPE_TAG, description = "Kinds of ticket change"),
        (name = controller::ticket_change_history::TICKET_CHANGE_HISTORY_TAG, description = "Ticket audit trail"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::ticket::get_tickets,
            controller::ticket::create_ticket
        ))
        .routes(routes!(
            controller::ticket::get_ticket,
            controller::ticket::update_ticket,
            controller::ticket::delete_ticket
        ))
        .routes(routes!(
            controller::note::get_notes,
            controller::note::create_note
        ))
        .routes(routes!(controller::note::get_note))
        .routes(routes!(controller::role::get_roles))
        .routes(routes!(controller::role::get_role))
        .routes(routes!(controller::state::get_states))
        .routes(routes!(controller::state::get_state))
        .routes(routes!(
            controller::ticket_change_type::get_ticket_change_types
        ))
        .routes(routes!(
            controller::ticket_change_type::get_ticket_change_type
        ))
        .routes(routes!(
            controller::ticket_change_history::get_ticket_change_histories
        ))
        .routes(routes!(
            controller::ticket_change_history::get_ticket_change_history
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
