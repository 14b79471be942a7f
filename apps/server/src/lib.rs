//! Consultorio REST service
//!
//! CRUD API over a single `consultorio` table, served with axum and backed by
//! either PostgreSQL (sqlx) or an in-memory store.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
