use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::ports::AppRepository;

pub struct PostgresAppRepository {
    pool: PgPool,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: String,
}

#[async_trait]
impl AppRepository for PostgresAppRepository {
    async fn find_by_id(&self, app_id: AppId) -> Result<Application, StorageError> {
        let row = sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        Ok(Application {
            id: AppId(row.id),
            name: row.name,
            secret: row.secret,
        })
    }
}
