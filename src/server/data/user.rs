use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserPayload,
    server::model::db::{RoleModel, UserModel},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// A duplicate user name or a role ID without a role row is rejected by the database.
    pub async fn create(&self, user: &UserPayload) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            user_name: ActiveValue::Set(user.user_name.clone()),
            display_name: ActiveValue::Set(user.display_name.clone()),
            email: ActiveValue::Set(user.email.clone()),
            phone: ActiveValue::Set(user.phone.clone()),
            role_id: ActiveValue::Set(user.role_id),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets every user along with their role, ordered by user ID
    pub async fn get_all(&self) -> Result<Vec<(UserModel, Option<RoleModel>)>, DbErr> {
        entity::prelude::User::find()
            .find_also_related(entity::role::Entity)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        user_id: i64,
    ) -> Result<Option<(UserModel, Option<RoleModel>)>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::role::Entity)
            .one(self.db)
            .await
    }

    /// Gets the users with the provided IDs, IDs without a user are skipped
    pub async fn get_many_by_ids(&self, user_ids: &[i64]) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn exists(&self, user_id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(user_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces every bound field of a user with the values of `user`
    ///
    /// Fields that are `None` in `user` are written as NULL.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The updated row
    /// - `Err(DbErr::RecordNotUpdated)` - No row with `user_id` was updated
    /// - `Err(DbErr)` - Any other database error, e.g. a unique or foreign key violation
    pub async fn update(&self, user_id: i64, user: &UserPayload) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            user_name: ActiveValue::Set(user.user_name.clone()),
            display_name: ActiveValue::Set(user.display_name.clone()),
            email: ActiveValue::Set(user.email.clone()),
            phone: ActiveValue::Set(user.phone.clone()),
            role_id: ActiveValue::Set(user.role_id),
        };

        user.update(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
