//! Business logic layer
//!
//! Services apply the request rules and delegate storage to repositories.

pub mod crud;

pub use crud::CrudService;
