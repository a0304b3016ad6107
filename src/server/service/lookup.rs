use sea_orm::DatabaseConnection;

use crate::{
    model::lookup::{RoleDto, StateDto, TicketChangeTypeDto},
    server::{
        data::lookup::{RoleRepository, StateRepository, TicketChangeTypeRepository},
        error::Error,
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    /// Creates a new instance of [`RoleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_roles(&self) -> Result<Vec<RoleDto>, Error> {
        let roles = RoleRepository::new(self.db).get_all().await?;

        Ok(roles.into_iter().map(RoleDto::from).collect())
    }

    pub async fn get_role(&self, role_id: i64) -> Result<Option<RoleDto>, Error> {
        let role = RoleRepository::new(self.db).get_by_id(role_id).await?;

        Ok(role.map(RoleDto::from))
    }
}

pub struct StateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StateService<'a> {
    /// Creates a new instance of [`StateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_states(&self) -> Result<Vec<StateDto>, Error> {
        let states = StateRepository::new(self.db).get_all().await?;

        Ok(states.into_iter().map(StateDto::from).collect())
    }

    pub async fn get_state(&self, state_id: i64) -> Result<Option<StateDto>, Error> {
        let state = StateRepository::new(self.db).get_by_id(state_id).await?;

        Ok(state.map(StateDto::from))
    }
}

pub struct TicketChangeTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketChangeTypeService<'a> {
    /// Creates a new instance of [`TicketChangeTypeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_ticket_change_types(&self) -> Result<Vec<TicketChangeTypeDto>, Error> {
        let change_types = TicketChangeTypeRepository::new(self.db).get_all().await?;

        Ok(change_types
            .into_iter()
            .map(TicketChangeTypeDto::from)
            .collect())
    }

    pub async fn get_ticket_change_type(
        &self,
        ticket_change_type_id: i64,
    ) -> Result<Option<TicketChangeTypeDto>, Error> {
        let change_type = TicketChangeTypeRepository::new(self.db)
            .get_by_id(ticket_change_type_id)
            .await?;

        Ok(change_type.map(TicketChangeTypeDto::from))
    }
}
