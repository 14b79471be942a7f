//! CRUD service - business logic for Consultorio operations
//!
//! Every operation is a pass-through to the repository after the identifier
//! rules are checked. Update is a full replacement with no version check, so
//! concurrent writers to the same row are last-write-wins.

use crate::{
    db::ConsultorioRepository,
    models::{Consultorio, Page, PageRequest},
    Error, Result,
};
use std::sync::Arc;
use validator::Validate;

pub struct CrudService {
    repository: Arc<dyn ConsultorioRepository>,
}

impl CrudService {
    pub fn new(repository: Arc<dyn ConsultorioRepository>) -> Self {
        Self { repository }
    }

    /// Create a new Consultorio (POST /api/consultorios)
    ///
    /// Rejects payloads that already carry an id; the store assigns one.
    pub async fn create(&self, consultorio: Consultorio) -> Result<Consultorio> {
        tracing::debug!(?consultorio, "REST request to save Consultorio");

        if consultorio.id.is_some() {
            return Err(Error::bad_request_alert(
                "A new consultorio cannot already have an ID",
                "idexists",
            ));
        }
        consultorio.validate()?;

        let created = self.repository.save(consultorio).await?;
        tracing::info!(id = ?created.id, "Consultorio created");
        Ok(created)
    }

    /// Replace an existing Consultorio (PUT /api/consultorios)
    ///
    /// All mutable fields are overwritten; a missing `nome` clears it.
    pub async fn update(&self, consultorio: Consultorio) -> Result<Consultorio> {
        tracing::debug!(?consultorio, "REST request to update Consultorio");

        let Some(id) = consultorio.id else {
            return Err(Error::bad_request_alert("Invalid id", "idnull"));
        };
        consultorio.validate()?;

        // the store reports an unknown id as NotFound
        let updated = self.repository.save(consultorio).await?;
        tracing::info!(id, "Consultorio updated");
        Ok(updated)
    }

    /// List Consultorios (GET /api/consultorios)
    pub async fn list(&self, request: &PageRequest) -> Result<Page<Consultorio>> {
        tracing::debug!(
            page = request.page,
            size = request.size,
            "REST request to get a page of Consultorios"
        );
        self.repository.find_all(request).await
    }

    /// Read one Consultorio (GET /api/consultorios/{id})
    pub async fn get(&self, id: i64) -> Result<Consultorio> {
        tracing::debug!(id, "REST request to get Consultorio");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound { id })
    }

    /// Delete a Consultorio (DELETE /api/consultorios/{id})
    ///
    /// Unknown ids are reported as not found rather than silently ignored.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "REST request to delete Consultorio");
        if !self.repository.delete_by_id(id).await? {
            return Err(Error::NotFound { id });
        }
        tracing::info!(id, "Consultorio deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }

    pub async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }
}
