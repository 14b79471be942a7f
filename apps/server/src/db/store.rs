//! PostgreSQL-backed `ConsultorioRepository` implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::{
    db::traits::ConsultorioRepository,
    models::{Consultorio, Page, PageRequest},
    Error, Result,
};

/// PostgreSQL-backed ConsultorioRepository implementation
#[derive(Clone)]
pub struct PostgresConsultorioRepository {
    pub(crate) pool: PgPool,
}

impl PostgresConsultorioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Consultorio {
        Consultorio {
            id: row.get("id"),
            nome: row.get("nome"),
        }
    }

    fn order_by_clause(request: &PageRequest) -> String {
        request
            .effective_sort()
            .iter()
            .map(|order| format!("{} {}", order.field.column(), order.direction.as_sql()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[async_trait]
impl ConsultorioRepository for PostgresConsultorioRepository {
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Consultorio>> {
        // Note: ORDER BY columns come from the `SortField` whitelist.
        let sql = format!(
            "SELECT id, nome FROM consultorio ORDER BY {} LIMIT $1 OFFSET $2",
            Self::order_by_clause(request)
        );

        let limit = i64::try_from(request.size).unwrap_or(i64::MAX);
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        // Page and total are read from one snapshot so X-Total-Count matches
        // the rows returned.
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await
            .map_err(Error::Database)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM consultorio")
            .fetch_one(&mut *tx)
            .await
            .map_err(Error::Database)?;

        tx.commit().await.map_err(Error::Database)?;

        Ok(Page {
            content: rows.iter().map(Self::from_row).collect(),
            total: u64::try_from(total).unwrap_or(0),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Consultorio>> {
        let row = sqlx::query("SELECT id, nome FROM consultorio WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn save(&self, consultorio: Consultorio) -> Result<Consultorio> {
        let row = match consultorio.id {
            None => sqlx::query("INSERT INTO consultorio (nome) VALUES ($1) RETURNING id, nome")
                .bind(&consultorio.nome)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?,
            Some(id) => sqlx::query(
                "UPDATE consultorio SET nome = $2 WHERE id = $1 RETURNING id, nome",
            )
            .bind(id)
            .bind(&consultorio.nome)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NotFound { id })?,
        };

        Ok(Self::from_row(&row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM consultorio WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM consultorio")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(count.max(0) as u64)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
