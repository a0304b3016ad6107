use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with a display name & email derived from `user_name`
    pub async fn insert_user(
        &self,
        user_name: &str,
        role_id: Option<i64>,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            user_name: ActiveValue::Set(Some(user_name.to_string())),
            display_name: ActiveValue::Set(Some(format!("Test User {}", user_name))),
            email: ActiveValue::Set(Some(format!("{}@example.com", user_name))),
            phone: ActiveValue::Set(None),
            role_id: ActiveValue::Set(role_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
