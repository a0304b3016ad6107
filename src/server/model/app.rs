use sea_orm::DatabaseConnection;

/// Shared state handed to every handler.
///
/// Holds the database connection pool and nothing else; each request works
/// against its own pooled connection.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
