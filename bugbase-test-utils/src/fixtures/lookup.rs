use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn lookup<'a>(&'a self) -> LookupFixtures<'a> {
        LookupFixtures { setup: self }
    }
}

pub struct LookupFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> LookupFixtures<'a> {
    pub async fn insert_role(&self, role_name: &str) -> Result<entity::role::Model, TestError> {
        Ok(entity::prelude::Role::insert(entity::role::ActiveModel {
            role_name: ActiveValue::Set(Some(role_name.to_string())),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_state(&self, state_name: &str) -> Result<entity::state::Model, TestError> {
        Ok(entity::prelude::State::insert(entity::state::ActiveModel {
            state_name: ActiveValue::Set(Some(state_name.to_string())),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_ticket_change_type(
        &self,
        ticket_change_type_name: &str,
    ) -> Result<entity::ticket_change_type::Model, TestError> {
        Ok(
            entity::prelude::TicketChangeType::insert(entity::ticket_change_type::ActiveModel {
                ticket_change_type_name: ActiveValue::Set(Some(
                    ticket_change_type_name.to_string(),
                )),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
