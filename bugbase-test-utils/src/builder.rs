//! Declarative test builder.
//!
//! Configuration methods are chained on [`TestBuilder`] and queued; the final `build()` call
//! creates the tables and inserts the queued lookup rows in one go.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_bugbase_tables: bool,

    // Lookup rows to insert, IDs are assigned in insertion order starting at 1
    roles: Vec<String>,
    states: Vec<String>,
    ticket_change_types: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_bugbase_tables: false,
            roles: Vec::new(),
            states: Vec::new(),
            ticket_change_types: Vec::new(),
        }
    }

    /// Add every Bugbase table to the test database.
    ///
    /// Creates Role, State, TicketChangeType, User, Ticket, Note and TicketChangeHistory,
    /// including their unique constraints and foreign keys.
    pub fn with_bugbase_tables(mut self) -> Self {
        self.include_bugbase_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bugbase_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bugbase_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Role)
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a role with the provided name during `build()`.
    pub fn with_role(mut self, role_name: impl Into<String>) -> Self {
        self.roles.push(role_name.into());
        self
    }

    /// Insert a ticket state with the provided name during `build()`.
    pub fn with_state(mut self, state_name: impl Into<String>) -> Self {
        self.states.push(state_name.into());
        self
    }

    /// Insert a ticket change type with the provided name during `build()`.
    pub fn with_ticket_change_type(mut self, ticket_change_type_name: impl Into<String>) -> Self {
        self.ticket_change_types
            .push(ticket_change_type_name.into());
        self
    }

    /// Build the test context by creating all configured tables & lookup rows.
    ///
    /// Tables are created first (Bugbase tables if specified, then custom tables), then the
    /// roles, states & ticket change types are inserted in the order they were queued.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_bugbase_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Role),
                schema.create_table_from_entity(entity::prelude::State),
                schema.create_table_from_entity(entity::prelude::TicketChangeType),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Ticket),
                schema.create_table_from_entity(entity::prelude::Note),
                schema.create_table_from_entity(entity::prelude::TicketChangeHistory),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert lookup rows
        for role_name in &self.roles {
            setup.lookup().insert_role(role_name).await?;
        }

        for state_name in &self.states {
            setup.lookup().insert_state(state_name).await?;
        }

        for change_type_name in &self.ticket_change_types {
            setup
                .lookup()
                .insert_ticket_change_type(change_type_name)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
