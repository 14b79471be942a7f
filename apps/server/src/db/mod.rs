//! Persistence layer

pub mod memory;
pub mod store;
pub mod traits;

pub use memory::InMemoryConsultorioRepository;
pub use store::PostgresConsultorioRepository;
pub use traits::ConsultorioRepository;
