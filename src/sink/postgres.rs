use super::{LeadSink, SinkError};
use crate::contact::ContactSubmission;
use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::BoxFuture;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Contact submissions written straight into a PostgreSQL table.
#[derive(Clone)]
pub struct PgSink {
    pool: PgPool,
    insert_sql: String,
}

impl PgSink {
    /// Connect and create the table if it does not exist yet.
    ///
    /// `table` must already have passed [`super::is_valid_table_name`].
    pub async fn connect(database_url: &str, table: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        sqlx::query(&create_table_sql(table))
            .execute(&pool)
            .await
            .context(format!("Failed to create {} table", table))?;

        info!("✓ PostgreSQL lead table '{}' ready", table);

        Ok(Self {
            pool,
            insert_sql: insert_sql(table),
        })
    }
}

fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            language TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
        table
    )
}

fn insert_sql(table: &str) -> String {
    format!(
        "INSERT INTO {} (name, email, phone, subject, message, language, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
        table
    )
}

impl LeadSink for PgSink {
    fn insert<'a>(&'a self, record: &'a ContactSubmission) -> BoxFuture<'a, Result<(), SinkError>> {
        Box::pin(async move {
            sqlx::query(&self.insert_sql)
                .bind(&record.name)
                .bind(&record.email)
                .bind(&record.phone)
                .bind(&record.subject)
                .bind(&record.message)
                .bind(record.language.code())
                .bind(Utc::now())
                .execute(&self.pool)
                .await?;
            Ok(())
        })
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
