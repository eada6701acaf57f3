//! Bookshelf
//!
//! A small REST JSON server keeping a catalog of books in memory.
//! Books are validated and deduplicated on creation and receive a
//! store-assigned identifier.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build state around a fresh, empty repository
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository::Repository::new())),
        }
    }
}
