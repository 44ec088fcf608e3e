use async_trait::async_trait;
use thiserror::Error;

use crate::models::{LocationProfile, NewLocationProfile, RoofDirectionProfile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Access to the immutable reference tables the estimator draws on:
/// service-area locations and roof-direction multipliers.
///
/// Estimate inputs and results are never stored; the only writes are the
/// location loader's idempotent delete-and-insert imports.
#[async_trait]
pub trait SolarRepository: Send + Sync {
    // Service locations
    async fn get_location(&self, id: i32) -> Result<LocationProfile, RepositoryError>;
    async fn get_location_by_name(&self, name: &str) -> Result<LocationProfile, RepositoryError>;
    async fn list_locations(&self) -> Result<Vec<LocationProfile>, RepositoryError>;
    async fn insert_location(
        &self,
        location: &NewLocationProfile,
    ) -> Result<LocationProfile, RepositoryError>;
    async fn delete_location(&self, name: &str) -> Result<(), RepositoryError>;

    // Roof directions
    async fn get_roof_direction(&self, id: i32) -> Result<RoofDirectionProfile, RepositoryError>;
    async fn get_roof_direction_by_code(
        &self,
        code: &str,
    ) -> Result<RoofDirectionProfile, RepositoryError>;
    async fn list_roof_directions(&self) -> Result<Vec<RoofDirectionProfile>, RepositoryError>;
}
