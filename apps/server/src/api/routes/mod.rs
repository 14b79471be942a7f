//! Route tables

pub mod consultorio;

pub use consultorio::consultorio_routes;
