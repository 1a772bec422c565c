//! Shared configuration and errors for Budget Sim.
//!
//! This crate provides what every other crate needs:
//! - Layered configuration (files, environment, `.env`)
//! - Application-wide error types

pub mod config;
pub mod error;

pub use self::config::{AppConfig, CacheConfig, DashboardConfig, LoggingConfig, ThemeConfig};
pub use error::{AppError, AppResult};
