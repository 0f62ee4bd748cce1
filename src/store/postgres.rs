//! PostgreSQL-backed recipe store and startup bootstrap.

use super::RecipeStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Recipe, RecipeInput};
use crate::query::RecipeQuery;
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgPool};
use std::str::FromStr;

/// Recipe store over a connection pool. Each call checks a connection out for that call only.
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        PgRecipeStore { pool }
    }

    async fn fetch_optional(&self, q: QueryBuf) -> Result<Option<Recipe>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Recipe>(&q.sql);
        for p in q.params {
            query = p.bind_to(query);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn fetch_all(&self, q: QueryBuf) -> Result<Vec<Recipe>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Recipe>(&q.sql);
        for p in q.params {
            query = p.bind_to(query);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, AppError> {
        inserted(self.fetch_optional(sql::insert(&input)).await?)
    }

    async fn get(&self, id: i64) -> Result<Recipe, AppError> {
        self.fetch_optional(sql::select_by_id(id))
            .await?
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, AppError> {
        self.fetch_all(sql::select_list(query)).await
    }

    async fn update(&self, id: i64, input: RecipeInput) -> Result<Recipe, AppError> {
        self.fetch_optional(sql::update(id, &input))
            .await?
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, (i64,)>(&q.sql);
        for p in q.params {
            query = p.bind_to(query);
        }
        match query.fetch_optional(&self.pool).await? {
            Some(_) => Ok(()),
            None => Err(AppError::recipe_not_found(id)),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the recipes table and its index if missing.
pub async fn ensure_recipes_table(pool: &PgPool) -> Result<(), AppError> {
    for ddl in sql::create_table() {
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

/// Connect to the target database; if the server reports it missing (SQLSTATE 3D000),
/// create it through the `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let target = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    match target.connect().await {
        Ok(conn) => return Ok(conn.close().await?),
        Err(e) if is_missing_database(&e) => {}
        Err(e) => return Err(e.into()),
    }
    let Some((admin, db_name)) = admin_options(&target) else {
        return Ok(());
    };
    tracing::info!(database = %db_name, "creating database");
    let mut conn = admin.connect().await?;
    sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
        .execute(&mut conn)
        .await?;
    conn.close().await?;
    Ok(())
}

fn is_missing_database(e: &sqlx::Error) -> bool {
    matches!(e.as_database_error().and_then(|d| d.code()), Some(code) if code == "3D000")
}

/// Same server and settings pointed at `postgres`, plus the target database name.
fn admin_options(target: &PgConnectOptions) -> Option<(PgConnectOptions, String)> {
    let db_name = target.get_database()?.to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return None;
    }
    Some((target.clone().database("postgres"), db_name))
}

fn inserted(row: Option<Recipe>) -> Result<Recipe, AppError> {
    row.ok_or_else(|| AppError::Internal("INSERT ... RETURNING produced no row".into()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
