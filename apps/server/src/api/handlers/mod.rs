//! HTTP handlers

pub mod consultorio;
pub mod health;
