//! In-memory `ConsultorioRepository` implementation.
//!
//! Keeps rows in a `BTreeMap` behind an async `RwLock`. Identifiers come from
//! a monotonically increasing sequence starting at 1 and are never reused,
//! matching a `BIGSERIAL` column.
//!
//! Primary use-case: integration tests and local runs without PostgreSQL.

use async_trait::async_trait;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering as AtomicOrdering},
};
use tokio::sync::RwLock;

use crate::{
    db::traits::ConsultorioRepository,
    models::{Consultorio, Direction, Page, PageRequest, SortField, SortOrder},
    Error, Result,
};

#[derive(Default)]
pub struct InMemoryConsultorioRepository {
    rows: RwLock<BTreeMap<i64, Consultorio>>,
    sequence: AtomicI64,
}

impl InMemoryConsultorioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, AtomicOrdering::SeqCst) + 1
    }
}

fn compare(a: &Consultorio, b: &Consultorio, orders: &[SortOrder]) -> Ordering {
    for order in orders {
        let ordering = match order.field {
            SortField::Id => a.id.cmp(&b.id),
            // NULLS LAST for ascending, like PostgreSQL
            SortField::Nome => match (&a.nome, &b.nome) {
                (Some(x), Some(y)) => x.cmp(y),
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
            },
        };
        let ordering = match order.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl ConsultorioRepository for InMemoryConsultorioRepository {
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Consultorio>> {
        let rows = self.rows.read().await;
        let mut content: Vec<Consultorio> = rows.values().cloned().collect();
        let total = content.len() as u64;

        let orders = request.effective_sort();
        content.sort_by(|a, b| compare(a, b, &orders));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = content.into_iter().skip(offset).take(size).collect();

        Ok(Page { content, total })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Consultorio>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut consultorio: Consultorio) -> Result<Consultorio> {
        let mut rows = self.rows.write().await;
        match consultorio.id {
            None => {
                let id = self.next_id();
                consultorio.id = Some(id);
                rows.insert(id, consultorio.clone());
            }
            Some(id) => {
                let row = rows.get_mut(&id).ok_or(Error::NotFound { id })?;
                *row = consultorio.clone();
            }
        }
        Ok(consultorio)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
