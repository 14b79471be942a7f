//! Domain models

pub mod consultorio;
pub mod page;

pub use consultorio::Consultorio;
pub use page::{Direction, Page, PageRequest, SortField, SortOrder};
