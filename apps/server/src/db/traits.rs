//! Repository trait definition

use crate::{
    models::{Consultorio, Page, PageRequest},
    Result,
};
use async_trait::async_trait;

/// Abstract interface over the `consultorio` table
#[async_trait]
pub trait ConsultorioRepository: Send + Sync {
    /// One page of entities in the requested order, plus the total row count
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Consultorio>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Consultorio>>;

    /// Insert when `id` is `None` (the store assigns one), otherwise replace
    /// every column of the row with that id.
    async fn save(&self, consultorio: Consultorio) -> Result<Consultorio>;

    /// Returns whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<u64>;

    /// Health check
    async fn health_check(&self) -> Result<()>;
}
