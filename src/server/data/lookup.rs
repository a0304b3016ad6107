//! Repositories for the read-only lookup tables: roles, states and ticket change types.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{RoleModel, StateModel, TicketChangeTypeModel};

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<RoleModel>, DbErr> {
        entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, role_id: i64) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::Role::find_by_id(role_id).one(self.db).await
    }
}

pub struct StateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StateRepository<'a, C> {
    /// Creates a new instance of [`StateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<StateModel>, DbErr> {
        entity::prelude::State::find()
            .order_by_asc(entity::state::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, state_id: i64) -> Result<Option<StateModel>, DbErr> {
        entity::prelude::State::find_by_id(state_id).one(self.db).await
    }

    /// Gets the states with the provided IDs, IDs without a state are skipped
    pub async fn get_many_by_ids(&self, state_ids: &[i64]) -> Result<Vec<StateModel>, DbErr> {
        if state_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::State::find()
            .filter(entity::state::Column::Id.is_in(state_ids.iter().copied()))
            .all(self.db)
            .await
    }
}

pub struct TicketChangeTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketChangeTypeRepository<'a, C> {
    /// Creates a new instance of [`TicketChangeTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TicketChangeTypeModel>, DbErr> {
        entity::prelude::TicketChangeType::find()
            .order_by_asc(entity::ticket_change_type::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        ticket_change_type_id: i64,
    ) -> Result<Option<TicketChangeTypeModel>, DbErr> {
        entity::prelude::TicketChangeType::find_by_id(ticket_change_type_id)
            .one(self.db)
            .await
    }

    /// Gets the change types with the provided IDs, IDs without a change type are skipped
    pub async fn get_many_by_ids(
        &self,
        ticket_change_type_ids: &[i64],
    ) -> Result<Vec<TicketChangeTypeModel>, DbErr> {
        if ticket_change_type_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TicketChangeType::find()
            .filter(
                entity::ticket_change_type::Column::Id
                    .is_in(ticket_change_type_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }
}
