//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment with an in-memory SQLite database
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_bugbase_tables().build().await?;
///
/// let user = test.user().insert_user("jdoe", None).await?;
/// let ticket = test.ticket().insert_ticket("Bad Bug", None, Some(user.id)).await?;
///
/// let state: AppState = test.into_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a connected database and no tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements, in the order given.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without the test utilities depending on the
    /// server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Consuming variant of [`TestContext::to_app_state`]
    pub fn into_app_state<T>(self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db)
    }
}
