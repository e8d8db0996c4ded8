//! PostgreSQL admin repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use newsroom_core::error::{AppError, ErrorKind};
use newsroom_core::result::AppResult;
use newsroom_entity::admin::{AdminAccount, CreateAdmin};

use crate::store::AdminStore;

/// Repository for admin accounts stored in the `admins` table.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminAccount>> {
        sqlx::query_as::<_, AdminAccount>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminAccount>> {
        sqlx::query_as::<_, AdminAccount>(
            "SELECT id, username, password_hash, created_at FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e))
    }

    async fn create(&self, data: &CreateAdmin) -> AppResult<AdminAccount> {
        sqlx::query_as::<_, AdminAccount>(
            "INSERT INTO admins (id, username, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING id, username, password_hash, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Username already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete admin", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count admins", e))?;
        Ok(count as u64)
    }
}
