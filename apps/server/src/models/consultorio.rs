//! The `Consultorio` entity

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

/// A consulting room record.
///
/// `id` is `None` until the store assigns one on first save. Equality and
/// hashing only look at `id`: two instances are equal when both carry the
/// same identifier, and an instance without an identifier equals nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Consultorio {
    pub id: Option<i64>,
    #[validate(length(max = 255))]
    pub nome: Option<String>,
}

impl Consultorio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier-only comparison backing `PartialEq`.
    pub fn same_identity(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

impl PartialEq for Consultorio {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Hash for Consultorio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // all unsaved entities hash alike
        self.id.unwrap_or(0).hash(state);
    }
}
