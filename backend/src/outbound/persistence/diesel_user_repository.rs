//! PostgreSQL-backed `UserRepository`.
//!
//! Name uniqueness is left to the `UNIQUE(name)` constraint; its violation
//! becomes [`UserPersistenceError::DuplicateName`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::diesel_error_mapping::{StoreFailure, classify_diesel_error, classify_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the user registry storage.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: StoreFailure, name: Option<&str>) -> UserPersistenceError {
    match failure {
        StoreFailure::Connection(message) => UserPersistenceError::connection(message),
        StoreFailure::UniqueViolation => {
            UserPersistenceError::duplicate_name(name.unwrap_or_default())
        }
        StoreFailure::ForeignKeyViolation(message) | StoreFailure::Query(message) => {
            UserPersistenceError::query(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    to_port_error(classify_diesel_error(error), None)
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_parts(row.id, row.name, row.color)
        .map_err(|err| UserPersistenceError::query(format!("invalid user row: {err}")))
}

impl DieselUserRepository {
    async fn conn(
        &self,
    ) -> Result<
        diesel_async::pooled_connection::bb8::PooledConnection<'_, diesel_async::AsyncPgConnection>,
        UserPersistenceError,
    > {
        self.pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err), None))
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.conn().await?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.conn().await?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.conn().await?;
        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow {
                name: draft.name.as_ref(),
                color: draft.color.as_ref(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| to_port_error(classify_diesel_error(err), Some(draft.name.as_ref())))?;
        row_to_user(row)
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.conn().await?;
        let row: Option<UserRow> = diesel::update(users::table.find(id.get()))
            .set(UserUpdate {
                name: draft.name.as_ref(),
                color: draft.color.as_ref(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| to_port_error(classify_diesel_error(err), Some(draft.name.as_ref())))?;
        row.map(row_to_user).transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.conn().await?;
        let affected = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
