use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    pass_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            password_hash: row.pass_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, StorageError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, pass_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StorageError::AlreadyExists(email.to_string());
                }
            }
            StorageError::Database(e.to_string())
        })?;

        Ok(UserId(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, StorageError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, pass_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
        .map(User::from)
        .ok_or(StorageError::NotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
        .ok_or(StorageError::NotFound)
    }
}
