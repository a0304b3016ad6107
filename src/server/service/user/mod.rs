//! User service layer.
//!
//! User accounts are the only writable store with a uniqueness rule (`userName`). The
//! service leaves that rule to the database and reports the violation as a database error.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::user::{UserDetailDto, UserPayload},
    server::{data::user::UserRepository, error::Error, model::db::{RoleModel, UserModel}},
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their role inlined, ordered by user ID.
    pub async fn get_users(&self) -> Result<Vec<UserDetailDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(to_detail).collect())
    }

    /// Retrieves a user with their role inlined.
    ///
    /// # Returns
    /// - `Ok(Some(UserDetailDto))` - User found
    /// - `Ok(None)` - No user with `user_id`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i64) -> Result<Option<UserDetailDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(to_detail))
    }

    /// Creates a user and returns it as read back from the database.
    ///
    /// # Returns
    /// - `Ok(UserDetailDto)` - The new user with their role inlined
    /// - `Err(Error::DbErr)` - Insert failed, e.g. duplicate user name or unknown role
    pub async fn create_user(&self, payload: &UserPayload) -> Result<UserDetailDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.create(payload).await?;

        tracing::debug!("Created user ID {}", user.id);

        user_repo.get_by_id(user.id).await?.map(to_detail).ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to read back user ID {} after creating it",
                user.id
            ))
        })
    }

    /// Replaces the bound fields of a user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDetailDto))` - The updated user
    /// - `Ok(None)` - No user with `user_id`
    /// - `Err(Error::InternalError)` - The update affected no row although the user exists
    /// - `Err(Error::DbErr)` - Update failed, e.g. duplicate user name or unknown role
    pub async fn update_user(
        &self,
        user_id: i64,
        payload: &UserPayload,
    ) -> Result<Option<UserDetailDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.update(user_id, payload).await {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => {
                if user_repo.exists(user_id).await? {
                    return Err(Error::InternalError(format!(
                        "Update of user ID {} affected no rows although the user exists",
                        user_id
                    )));
                }

                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        }

        Ok(user_repo.get_by_id(user_id).await?.map(to_detail))
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user with `user_id`
    /// - `Err(Error::DbErr)` - Delete failed, e.g. the user is still referenced by a ticket
    pub async fn delete_user(&self, user_id: i64) -> Result<bool, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        Ok(result.rows_affected > 0)
    }
}

fn to_detail((user, role): (UserModel, Option<RoleModel>)) -> UserDetailDto {
    UserDetailDto {
        user: user.into(),
        role: role.map(Into::into),
    }
}
