use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Serve the API on the configured address until Ctrl-C is received
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Never resolve so the server keeps running rather than shutting down immediately
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, stopping server");
}
