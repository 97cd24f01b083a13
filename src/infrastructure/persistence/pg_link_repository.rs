//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkFields};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, name, subdomain, deep_link, branded_link, created_at, updated_at";

/// PostgreSQL repository for link storage and retrieval.
///
/// All statements are parameterised; rows map onto [`Link`] via `FromRow`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, fields: LinkFields) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            INSERT INTO links (name, subdomain, deep_link, branded_link)
            VALUES ($1, $2, $3, $4)
            RETURNING {LINK_COLUMNS}
            "#
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(fields.name)
            .bind(fields.subdomain)
            .bind(fields.deep_link)
            .bind(fields.branded_link)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE id = $1");

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn find_by_name_and_subdomain(
        &self,
        name: &str,
        subdomain: &str,
    ) -> Result<Option<Link>, AppError> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE name = $1 AND subdomain = $2 LIMIT 1"
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(name)
            .bind(subdomain)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        subdomain: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE ($1::text IS NULL OR subdomain = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let links = sqlx::query_as::<_, Link>(&sql)
            .bind(subdomain)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(links)
    }

    async fn count(&self, subdomain: Option<String>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM links WHERE ($1::text IS NULL OR subdomain = $1)",
        )
        .bind(subdomain)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, fields: LinkFields) -> Result<Option<Link>, AppError> {
        let sql = format!(
            r#"
            UPDATE links
            SET name = $2,
                subdomain = $3,
                deep_link = $4,
                branded_link = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING {LINK_COLUMNS}
            "#
        );

        let link = sqlx::query_as::<_, Link>(&sql)
            .bind(id)
            .bind(fields.name)
            .bind(fields.subdomain)
            .bind(fields.deep_link)
            .bind(fields.branded_link)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
